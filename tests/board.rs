// Native tests for the placement board, the run timer and the leaderboard.
// Times are fed in as plain f64 milliseconds, so no browser clock is needed.

use rig_builder::{
    GameError, LeaderboardStore, PlacementBoard, RunResult, RunTimer, RIG_PARTS, SLOT_COUNT,
};

// Each part id must be found exactly once across slots and tray.
fn assert_parts_conserved(board: &PlacementBoard) {
    for part in RIG_PARTS {
        let in_slots = (0..SLOT_COUNT)
            .filter(|&s| board.occupant(s).map(|p| p.id) == Some(part.id))
            .count();
        let in_tray = board.unplaced().filter(|p| p.id == part.id).count();
        assert_eq!(
            in_slots + in_tray,
            1,
            "part '{}' found {} times in slots and {} times in tray",
            part.id,
            in_slots,
            in_tray
        );
    }
}

#[test]
fn parts_are_conserved_under_action_sequences() {
    let mut board = PlacementBoard::new();
    assert_parts_conserved(&board);

    // Mix of placements, displacements, moves and removals.
    board.place(0, "gpu").unwrap();
    assert_parts_conserved(&board);
    board.place(0, "ram").unwrap(); // displaces gpu back to tray
    assert_parts_conserved(&board);
    board.place(3, "ram").unwrap(); // moves ram from slot 0 to slot 3
    assert_parts_conserved(&board);
    board.remove(3).unwrap();
    assert_parts_conserved(&board);
    board.remove(3).unwrap(); // removing an empty slot is a no-op
    assert_parts_conserved(&board);
    for part in RIG_PARTS {
        board.place(part.slot, part.id).unwrap();
        assert_parts_conserved(&board);
    }
}

#[test]
fn displaced_part_returns_to_tray() {
    let mut board = PlacementBoard::new();
    board.place(2, "fan").unwrap();
    assert!(board.unplaced().all(|p| p.id != "fan"));
    board.place(2, "gpu").unwrap();
    assert_eq!(board.occupant(2).map(|p| p.id), Some("gpu"));
    // The fan came back, at the end of the tray.
    assert_eq!(board.unplaced().last().map(|p| p.id), Some("fan"));
}

#[test]
fn solved_is_positional_not_just_full() {
    let mut board = PlacementBoard::new();
    // Fill completely but swap two parts.
    for part in RIG_PARTS.iter().take(SLOT_COUNT - 2) {
        board.place(part.slot, part.id).unwrap();
    }
    board.place(7, "fan").unwrap(); // fan belongs in 6
    board.place(6, "cable").unwrap(); // cable belongs in 7
    let (placed, correct) = board.progress();
    assert_eq!(placed, SLOT_COUNT, "board should be full");
    assert_eq!(correct, SLOT_COUNT - 2);
    assert!(!board.is_solved(), "a full but mis-arranged board is not solved");

    // Swap them back into position (place lifts the part from its old slot).
    board.place(6, "fan").unwrap();
    board.place(7, "cable").unwrap();
    assert!(board.is_solved());
    assert_eq!(board.progress(), (SLOT_COUNT, SLOT_COUNT));
}

#[test]
fn wrong_slot_then_right_slot() {
    // The gpu belongs in slot 2; drop it in slot 5 first, then in slot 2.
    let mut board = PlacementBoard::new();
    board.place(5, "gpu").unwrap();
    board.place(2, "gpu").unwrap();
    assert!(board.occupant(5).is_none(), "slot 5 should have been vacated");
    assert_eq!(board.occupant(2).map(|p| p.id), Some("gpu"));
    assert!(!board.is_solved(), "seven slots are still empty");
}

#[test]
fn board_rejects_bad_arguments() {
    let mut board = PlacementBoard::new();
    assert!(matches!(
        board.place(SLOT_COUNT, "gpu"),
        Err(GameError::InvalidArgument(_))
    ));
    assert!(matches!(
        board.place(0, "warp-drive"),
        Err(GameError::InvalidArgument(_))
    ));
    assert!(matches!(
        board.remove(SLOT_COUNT),
        Err(GameError::InvalidArgument(_))
    ));
    // Nothing above touched the board.
    assert_eq!(board.progress(), (0, 0));
    assert_eq!(board.unplaced().count(), SLOT_COUNT);
}

#[test]
fn placing_onto_own_slot_is_a_noop() {
    let mut board = PlacementBoard::new();
    board.place(4, "ssd").unwrap();
    board.place(4, "ssd").unwrap();
    assert_eq!(board.occupant(4).map(|p| p.id), Some("ssd"));
    assert_parts_conserved(&board);
}

// --- RunTimer ----------------------------------------------------------------

#[test]
fn timer_derives_elapsed_from_start_instant() {
    let mut timer = RunTimer::new();
    assert_eq!(timer.elapsed(5_000.0), 0.0, "idle timer reads zero");
    timer.start(1_000.0).unwrap();
    assert!(timer.is_running());
    // Recomputed from the start instant on every read, regardless of how
    // many reads happened in between.
    assert_eq!(timer.elapsed(1_500.0), 0.5);
    assert_eq!(timer.elapsed(11_000.0), 10.0);
    assert_eq!(timer.elapsed(1_500.0), 0.5);
}

#[test]
fn stopped_timer_is_frozen() {
    let mut timer = RunTimer::new();
    timer.start(0.0).unwrap();
    let frozen = timer.stop(45_200.0).unwrap();
    assert_eq!(frozen, 45.2);
    assert!(timer.is_stopped());
    // Later reads and later "now" values return the frozen value.
    assert_eq!(timer.elapsed(99_999.0), 45.2);
    // A second stop never re-measures.
    assert_eq!(timer.stop(99_999.0).unwrap(), 45.2);
}

#[test]
fn timer_state_errors() {
    let mut timer = RunTimer::new();
    assert!(matches!(timer.stop(1.0), Err(GameError::IllegalState(_))));
    timer.start(0.0).unwrap();
    assert!(matches!(timer.start(2.0), Err(GameError::IllegalState(_))));
    // The failed restart did not move the start instant.
    assert_eq!(timer.elapsed(1_000.0), 1.0);
}

#[test]
fn timer_clamps_backwards_clock_to_zero() {
    let mut timer = RunTimer::new();
    timer.start(1_000.0).unwrap();
    assert_eq!(timer.elapsed(500.0), 0.0);
    assert_eq!(timer.stop(500.0).unwrap(), 0.0);
}

// --- LeaderboardStore ----------------------------------------------------------

#[test]
fn insert_keeps_ascending_order() {
    let mut store = LeaderboardStore::new();
    for (name, time) in [("A", 45.2), ("B", 52.8), ("C", 58.1), ("D", 61.5), ("E", 67.3)] {
        store.insert(RunResult::new(name, time));
    }
    let names: Vec<&str> = store.top(5).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D", "E"]);

    assert_eq!(store.insert(RunResult::new("You", 50.0)), Some(1));
    let names: Vec<&str> = store.top(6).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "You", "B", "C", "D", "E"]);
    let times: Vec<f64> = store.top(6).iter().map(|r| r.time_secs).collect();
    assert_eq!(times, [45.2, 50.0, 52.8, 58.1, 61.5, 67.3]);
}

#[test]
fn equal_times_rank_after_existing_entries() {
    let mut store = LeaderboardStore::new();
    store.insert(RunResult::new("first", 30.0));
    store.insert(RunResult::new("slow", 40.0));
    // Same time as "first": must land behind it, ahead of "slow".
    assert_eq!(store.insert(RunResult::new("second", 30.0)), Some(1));
    let names: Vec<&str> = store.top(3).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "slow"]);
}

#[test]
fn duplicate_results_are_distinct_entries() {
    let mut store = LeaderboardStore::new();
    assert_eq!(store.insert(RunResult::new("You", 50.0)), Some(0));
    assert_eq!(store.insert(RunResult::new("You", 50.0)), Some(1));
    assert_eq!(store.len(), 2);
}

#[test]
fn store_is_bounded_and_drops_too_slow_results() {
    let mut store = LeaderboardStore::new();
    for i in 0..10 {
        store.insert(RunResult::new(format!("p{i}"), 10.0 + i as f64));
    }
    assert_eq!(store.len(), 10);

    // Worse than everything on a full board: dropped, content unchanged.
    let before: Vec<String> = store.top(10).iter().map(|r| r.name.clone()).collect();
    assert_eq!(store.insert(RunResult::new("slowpoke", 99.0)), None);
    assert_eq!(store.len(), 10);
    let after: Vec<String> = store.top(10).iter().map(|r| r.name.clone()).collect();
    assert_eq!(before, after);

    // Better than the tail: inserted, the previous last entry falls off.
    assert_eq!(store.insert(RunResult::new("quick", 9.0)), Some(0));
    assert_eq!(store.len(), 10);
    assert_eq!(store.top(10).last().unwrap().name, "p8");
}

#[test]
fn seeded_store_matches_catalog_order() {
    let store = LeaderboardStore::seeded();
    assert_eq!(store.len(), 5);
    assert_eq!(store.top(1)[0].name, "CryptoMiner1");
    assert_eq!(store.top(5).last().unwrap().name, "DigitalGold");
    // top(k) never reads past the end.
    assert_eq!(store.top(50).len(), 5);
}
