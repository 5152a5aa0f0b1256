use olymp_core::model::{ParticipantId, StoredParticipant};
use olymp_core::time::fixed_now;
use storage::repository::{SessionRecord, SessionRepository};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_session_keys() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_session?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_session().await.expect("load").is_none());

    let participant = StoredParticipant::new(ParticipantId::new(42), "Иван Петров");
    let record = SessionRecord::from_participant(&participant, fixed_now());
    repo.save_session(&record).await.expect("save");

    let loaded = repo
        .load_session()
        .await
        .expect("load")
        .expect("stored session");
    assert_eq!(loaded.participant_id, "42");
    assert_eq!(loaded.student_name, "Иван Петров");
    assert_eq!(loaded.into_participant().expect("parse"), participant);
}

#[tokio::test]
async fn sqlite_save_replaces_previous_session() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let first = StoredParticipant::new(ParticipantId::new(1), "Первый");
    let second = StoredParticipant::new(ParticipantId::new(2), "Второй");
    repo.save_session(&SessionRecord::from_participant(&first, fixed_now()))
        .await
        .expect("save first");
    repo.save_session(&SessionRecord::from_participant(&second, fixed_now()))
        .await
        .expect("save second");

    let loaded = repo
        .load_session()
        .await
        .expect("load")
        .expect("stored session");
    assert_eq!(loaded.participant_id, "2");
    assert_eq!(loaded.student_name, "Второй");
}

#[tokio::test]
async fn sqlite_clear_removes_both_keys() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let participant = StoredParticipant::new(ParticipantId::new(42), "Иван Петров");
    repo.save_session(&SessionRecord::from_participant(&participant, fixed_now()))
        .await
        .expect("save");

    repo.clear_session().await.expect("clear");
    assert!(repo.load_session().await.expect("load").is_none());

    // Clearing an already-empty store stays quiet.
    repo.clear_session().await.expect("clear again");
}
