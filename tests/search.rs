#![forbid(unsafe_code)]
use shiftboard::{
    model::{SearchWindow, Shift, ShiftId, TimeRange},
    scheduler::{search, ShiftError},
};

fn shift(id: &str, who: &str, sh: u32, eh: u32) -> Shift {
    Shift::new(ShiftId::new(id), who, TimeRange::from_hm(sh, 0, eh, 0).unwrap())
}

#[test]
fn only_fully_contained_shifts_are_returned() {
    let shifts = vec![
        shift("a", "alice", 8, 12),
        shift("b", "alice", 13, 17),
        shift("c", "alice", 7, 9),
    ];
    let window = SearchWindow::new(9, 0, 18, 0).unwrap();

    let found = search(&shifts, &window);
    let ids: Vec<&str> = found.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn results_are_sorted_by_start_with_stable_ties() {
    let shifts = vec![
        shift("late", "alice", 15, 16),
        shift("bob-early", "bob", 8, 10),
        shift("carol-early", "carol", 8, 9),
        shift("mid", "alice", 11, 12),
    ];

    let found = search(&shifts, &SearchWindow::default());
    let ids: Vec<&str> = found.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["bob-early", "carol-early", "mid", "late"]);
}

#[test]
fn window_bounds_are_inclusive() {
    let shifts = vec![shift("a", "alice", 9, 18)];
    let window = SearchWindow::new(9, 0, 18, 0).unwrap();
    assert_eq!(search(&shifts, &window).len(), 1);
}

#[test]
fn default_window_covers_the_day_up_to_23_59() {
    let window = SearchWindow::default();
    let shifts = vec![
        Shift::new(ShiftId::new("a"), "alice", TimeRange::from_hm(0, 0, 23, 59).unwrap()),
    ];
    assert_eq!(search(&shifts, &window).len(), 1);
    assert_eq!(window, SearchWindow::new(0, 0, 23, 59).unwrap());
}

#[test]
fn inverted_window_matches_nothing() {
    let shifts = vec![shift("a", "alice", 9, 10)];
    let window = SearchWindow::new(18, 0, 8, 0).unwrap();
    assert!(search(&shifts, &window).is_empty());
}

#[test]
fn window_rejects_out_of_bound_fields() {
    assert!(matches!(
        SearchWindow::new(0, 0, 24, 0),
        Err(ShiftError::InvalidRange(_))
    ));
    assert!(matches!(
        SearchWindow::new(0, 61, 23, 0),
        Err(ShiftError::InvalidRange(_))
    ));
}
