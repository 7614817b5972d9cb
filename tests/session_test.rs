mod helpers;

use binondo_guide::session::{transcript, Role, SessionError, SessionStore};

#[test]
fn sessions_are_isolated() {
    let store = SessionStore::new(helpers::guide());
    let a = store.open().unwrap();
    let b = store.open().unwrap();
    assert_ne!(a, b);
    assert_eq!(store.len(), Ok(2));

    store.submit(&a, "hopia").unwrap();
    store.submit(&a, "tikoy").unwrap();
    store.submit(&b, "escolta").unwrap();

    let history_a = store.history(&a).unwrap();
    let history_b = store.history(&b).unwrap();
    assert_eq!(history_a.len(), 4);
    assert_eq!(history_b.len(), 2);
    assert_eq!(history_a[0].role, Role::User);
    assert_eq!(history_a[0].text, "hopia");
    assert_eq!(history_a[1].role, Role::Assistant);
    assert_eq!(history_b[0].text, "escolta");
}

#[test]
fn clear_keeps_the_session_open() {
    let store = SessionStore::new(helpers::guide());
    let id = store.open().unwrap();
    store.submit(&id, "food spots").unwrap();

    store.clear(&id).unwrap();
    assert!(store.history(&id).unwrap().is_empty());

    let reply = store.submit(&id, "food spots").unwrap();
    assert!(reply.text.contains("Dong Bei Dumplings"));
    assert_eq!(store.history(&id).unwrap().len(), 2);
}

#[test]
fn unknown_session_is_not_found() {
    let store = SessionStore::default();
    assert_eq!(store.is_empty(), Ok(true));
    assert!(matches!(
        store.submit("nope", "hopia"),
        Err(SessionError::NotFound(id)) if id == "nope"
    ));
    assert!(matches!(store.clear("nope"), Err(SessionError::NotFound(_))));
    assert!(matches!(store.history("nope"), Err(SessionError::NotFound(_))));
}

#[test]
fn close_removes_the_session() {
    let store = SessionStore::default();
    let id = store.open().unwrap();
    store.close(&id).unwrap();
    assert_eq!(store.is_empty(), Ok(true));
    assert!(matches!(store.history(&id), Err(SessionError::NotFound(_))));
}

#[test]
fn one_off_questions_do_not_accumulate_sessions() {
    let store = SessionStore::new(helpers::guide());
    let kept = store.ask(None, true, "escolta").unwrap().session_id.unwrap();

    for _ in 0..1_000 {
        let answer = store.ask(None, false, "Tell me about the history of Eng Bee Tin").unwrap();
        assert!(answer.session_id.is_none());
        assert!(answer.reply.text.contains("Guan Eng Bee"));
    }

    assert_eq!(store.len(), Ok(1));
    store.close(&kept).unwrap();
    assert_eq!(store.len(), Ok(0));
}

#[test]
fn clones_share_sessions() {
    let store = SessionStore::default();
    let handle = store.clone();
    let id = store.open().unwrap();
    handle.submit(&id, "dim sum").unwrap();
    assert_eq!(store.history(&id).unwrap().len(), 2);
}

#[test]
fn export_transcript_as_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("visit.json");

    let mut convo = binondo_guide::session::Conversation::new();
    convo.submit(&helpers::guide(), "char siu");
    let turns = transcript::export(&convo, &path, "You", "Guide").unwrap();
    assert_eq!(turns, 2);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["turns"].as_array().unwrap().len(), 2);
}
