#![forbid(unsafe_code)]
use shiftboard::{
    io,
    model::{Roster, Shift, ShiftId, ShiftRequest, TimeRange},
    scheduler::Scheduler,
    storage::{IdStrategy, JsonStorage, ShiftBook, ShiftStore, Storage},
    user::{Directory, Role, User},
};
use std::fs;
use tempfile::tempdir;

fn seeded_roster() -> Roster {
    let mut s = Scheduler::from_roster(Roster::default());
    s.users_mut()
        .register(User::new("alice", [Role::Employee]))
        .unwrap();
    s.create_shift("alice", &ShiftRequest::new(9, 0, 17, 0)).unwrap();
    s.into_roster()
}

#[test]
fn json_roundtrip_keeps_counter_and_shifts() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json")).unwrap();
    storage.save(&seeded_roster()).unwrap();

    let mut s = Scheduler::from_roster(storage.load().unwrap());
    assert!(s.users().user_exists("alice"));
    assert_eq!(s.shifts().len(), 1);

    let next = s
        .create_shift("alice", &ShiftRequest::new(18, 0, 20, 0))
        .unwrap();
    assert_eq!(next.id.as_str(), "2");
}

#[test]
fn missing_file_loads_an_empty_roster() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("absent.json")).unwrap();
    assert!(!storage.exists());
    let roster = storage.load_or_default().unwrap();
    assert!(roster.shifts.is_empty());
    assert!(roster.users.users().is_empty());
}

#[test]
fn invalid_stored_range_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"users":[],"shifts":{"shifts":[{"id":"1","assignee":"alice","range":{"start":"17:00:00","end":"09:00:00"}}]}}"#,
    )
    .unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    assert!(storage.load().is_err());
}

#[test]
fn stored_times_with_seconds_are_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"users":[],"shifts":{"shifts":[{"id":"1","assignee":"alice","range":{"start":"09:00:30","end":"17:00:00"}}]}}"#,
    )
    .unwrap();
    let err = JsonStorage::open(&path).unwrap().load().unwrap_err();
    assert!(format!("{err:#}").contains("whole minutes"));
}

#[test]
fn roster_without_counter_does_not_overwrite_stored_shifts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"users":[{"username":"alice","roles":["ROLE_EMPLOYEE"]}],"shifts":{"shifts":[{"id":"1","assignee":"alice","range":{"start":"09:00:00","end":"17:00:00"}}]}}"#,
    )
    .unwrap();

    let mut s = Scheduler::from_roster(JsonStorage::open(&path).unwrap().load().unwrap());
    s.users_mut()
        .register(User::new("bob", [Role::Employee]))
        .unwrap();
    let created = s.create_shift("bob", &ShiftRequest::new(9, 0, 17, 0)).unwrap();

    assert_eq!(created.id.as_str(), "2");
    assert_eq!(s.shifts().len(), 2);
    let alices = s.shifts().find(&ShiftId::new("1")).unwrap();
    assert_eq!(alices.assignee, "alice");
    assert_eq!(alices.range, TimeRange::from_hm(9, 0, 17, 0).unwrap());
}

#[test]
fn sequential_counter_starts_past_the_largest_stored_id() {
    let mut book = ShiftBook::new();
    let range = TimeRange::from_hm(8, 0, 9, 0).unwrap();
    book.save(Shift::new(ShiftId::new("7"), "alice", range)).unwrap();
    book.save(Shift::new(ShiftId::new("legacy"), "bob", range)).unwrap();
    assert_eq!(book.next_id().as_str(), "8");
    assert_eq!(book.next_id().as_str(), "9");
}

#[test]
fn uuid_strategy_yields_distinct_ids() {
    let mut book = ShiftBook::with_strategy(IdStrategy::Uuid);
    let a = book.next_id();
    let b = book.next_id();
    assert_ne!(a, b);
    assert_eq!(a.as_str().len(), 36);
    assert_eq!(book.strategy(), IdStrategy::Uuid);
}

#[test]
fn deleting_an_unknown_id_from_the_book_fails() {
    let mut book = ShiftBook::new();
    let id = book.next_id();
    assert!(book.delete(&id).is_err());
}

#[test]
fn import_users_csv_parses_roles() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.csv");
    fs::write(
        &path,
        "username,roles\nboss,manager;employee\nalice,ROLE_EMPLOYEE\nguest,\n",
    )
    .unwrap();

    let users = io::import_users_csv(&path).unwrap();
    assert_eq!(users.len(), 3);
    assert!(users[0].has_role(Role::Manager) && users[0].has_role(Role::Employee));
    assert_eq!(users[1].roles.len(), 1);
    assert!(users[2].roles.is_empty());
}

#[test]
fn import_users_csv_rejects_unknown_roles() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.csv");
    fs::write(&path, "username,roles\nboss,admin\n").unwrap();
    assert!(io::import_users_csv(&path).is_err());
}

#[test]
fn export_shifts_csv_uses_twelve_hour_times() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.csv");
    let roster = seeded_roster();
    io::export_shifts_csv(&path, roster.shifts.shifts()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "id,user,start_time,end_time\n1,alice,09:00 AM,05:00 PM\n");
}
