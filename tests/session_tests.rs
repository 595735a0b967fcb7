use std::time::Duration;

use duelbot::game::rps::Choice;
use duelbot::game::session::SessionStore;

#[test]
fn test_create_get_delete_round_trip() {
    let store = SessionStore::new();
    assert!(store.is_empty());

    store.create("interaction-1", "user-a", Choice::Rock);

    let session = store.get("interaction-1").expect("session should exist");
    assert_eq!(session.challenger_id, "user-a");
    assert_eq!(session.challenger_choice, Choice::Rock);
    assert_eq!(store.len(), 1);

    store.delete("interaction-1");
    assert!(store.get("interaction-1").is_none());
    assert!(store.is_empty());
}

#[test]
fn test_get_unknown_id_is_none() {
    let store = SessionStore::new();
    assert!(store.get("never-created").is_none());
}

#[test]
fn test_delete_unknown_id_is_a_noop() {
    let store = SessionStore::new();
    store.create("keep", "user-a", Choice::Paper);

    store.delete("not-there");

    assert_eq!(store.len(), 1);
    assert!(store.get("keep").is_some());
}

#[test]
fn test_create_overwrites_last_write_wins() {
    let store = SessionStore::new();

    store.create("same-id", "user-a", Choice::Rock);
    store.create("same-id", "user-b", Choice::Scissors);

    // No collision error, the later challenge wins
    let session = store.get("same-id").unwrap();
    assert_eq!(session.challenger_id, "user-b");
    assert_eq!(session.challenger_choice, Choice::Scissors);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_sessions_are_independent() {
    let store = SessionStore::new();

    store.create("a", "user-a", Choice::Rock);
    store.create("b", "user-b", Choice::Paper);

    store.delete("a");

    assert!(store.get("a").is_none());
    assert_eq!(store.get("b").unwrap().challenger_id, "user-b");
}

#[test]
fn test_expired_sessions_read_as_absent() {
    let store = SessionStore::with_ttl(Duration::ZERO);

    store.create("stale", "user-a", Choice::Rock);
    std::thread::sleep(Duration::from_millis(5));

    assert!(store.get("stale").is_none());
    // The expired entry was also physically removed
    assert!(store.is_empty());
}

#[test]
fn test_create_purges_expired_entries() {
    let store = SessionStore::with_ttl(Duration::from_millis(1));

    store.create("old", "user-a", Choice::Rock);
    std::thread::sleep(Duration::from_millis(10));
    store.create("new", "user-b", Choice::Paper);

    // The sweep on create dropped the stale entry
    assert_eq!(store.len(), 1);
    assert!(store.get("new").is_some());
}

#[test]
fn test_live_sessions_survive_the_sweep() {
    let store = SessionStore::with_ttl(Duration::from_secs(3600));

    store.create("a", "user-a", Choice::Rock);
    store.create("b", "user-b", Choice::Paper);

    assert_eq!(store.len(), 2);
    assert!(store.get("a").is_some());
}
