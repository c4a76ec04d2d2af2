//! Integration tests for Database wellness-log query methods.

use chrono::Utc;
use devwell_core::UserProfile;
use devwell_db::Database;

const DAY: i64 = 86_400;

async fn db_with_user() -> (Database, i64) {
    let db = Database::new_in_memory().await.expect("in-memory DB");
    let user = db
        .insert_user("dev@example.com", "salt$hash", Utc::now().timestamp())
        .await
        .expect("insert user");
    (db, user.id)
}

#[tokio::test]
async fn test_user_lookup_roundtrip() {
    let (db, user_id) = db_with_user().await;

    let by_email = db
        .get_user_by_email("dev@example.com")
        .await
        .unwrap()
        .expect("user exists");
    assert_eq!(by_email.id, user_id);
    assert_eq!(by_email.password_hash, "salt$hash");

    let by_id = db.get_user_by_id(user_id).await.unwrap().expect("user exists");
    assert_eq!(by_id.email, "dev@example.com");

    assert!(db.get_user_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mood_logs_window_and_order() {
    let (db, user_id) = db_with_user().await;
    let now = Utc::now().timestamp();

    // Two in-window entries (out of order) and one outside the window.
    db.insert_mood_log(user_id, 4.5, Some(3), Some("good day"), now - DAY)
        .await
        .unwrap();
    db.insert_mood_log(user_id, 2.0, None, None, now - 3 * DAY)
        .await
        .unwrap();
    db.insert_mood_log(user_id, 1.0, Some(9), None, now - 10 * DAY)
        .await
        .unwrap();

    let logs = db.mood_logs_since(user_id, now - 7 * DAY).await.unwrap();
    assert_eq!(logs.len(), 2);
    // Ascending by created_at
    assert_eq!(logs[0].mood_score, 2.0);
    assert_eq!(logs[1].mood_score, 4.5);
    assert_eq!(logs[1].tiredness_level, Some(3));
    assert_eq!(logs[1].notes.as_deref(), Some("good day"));
}

#[tokio::test]
async fn test_logs_are_scoped_per_user() {
    let (db, user_id) = db_with_user().await;
    let other = db
        .insert_user("other@example.com", "salt$hash", Utc::now().timestamp())
        .await
        .unwrap();
    let now = Utc::now().timestamp();

    db.insert_hydration_log(user_id, 6, 2, 8, now).await.unwrap();
    db.insert_hydration_log(other.id, 1, 0, 8, now).await.unwrap();

    let logs = db.hydration_logs_since(user_id, now - DAY).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].water_glasses, 6);
    assert_eq!(logs[0].coffee_cups, 2);
    assert_eq!(logs[0].daily_goal, 8);
}

#[tokio::test]
async fn test_coding_and_focus_windows() {
    let (db, user_id) = db_with_user().await;
    let now = Utc::now().timestamp();

    db.insert_coding_session(user_id, 90, Some("refactor"), now - 2 * DAY)
        .await
        .unwrap();
    db.insert_coding_session(user_id, 45, None, now - 8 * DAY)
        .await
        .unwrap();
    db.insert_focus_session(user_id, 25, now - DAY).await.unwrap();

    let coding = db.coding_sessions_since(user_id, now - 7 * DAY).await.unwrap();
    assert_eq!(coding.len(), 1);
    assert_eq!(coding[0].duration_minutes, 90);
    assert_eq!(coding[0].notes.as_deref(), Some("refactor"));

    let focus = db.focus_sessions_since(user_id, now - 7 * DAY).await.unwrap();
    assert_eq!(focus.len(), 1);
    assert_eq!(focus[0].duration_minutes, 25);
}

#[tokio::test]
async fn test_profile_roundtrip() {
    let (db, user_id) = db_with_user().await;

    assert!(db.get_profile(user_id).await.unwrap().is_none());

    let profile = UserProfile {
        user_id,
        nickname: Some("dev".to_string()),
        timezone: Some("Africa/Nairobi".to_string()),
        work_hours_start: Some("09:00".to_string()),
        work_hours_end: Some("17:00".to_string()),
        coding_style: Some("pomodoro".to_string()),
        wellness_goals: vec!["hydration".to_string(), "sleep".to_string()],
        diet_preference: "vegan".to_string(),
        reminder_frequency: Some("balanced".to_string()),
        age: Some(29),
        weight: Some(70.5),
        created_at: Utc::now().timestamp(),
    };
    db.insert_profile(&profile).await.unwrap();

    let stored = db.get_profile(user_id).await.unwrap().expect("profile exists");
    assert_eq!(stored, profile);

    // Second insert for the same user violates the primary key.
    assert!(db.insert_profile(&profile).await.is_err());
}

#[tokio::test]
async fn test_window_logs_combines_all_categories() {
    let (db, user_id) = db_with_user().await;
    let now = Utc::now().timestamp();

    db.insert_mood_log(user_id, 4.0, None, None, now - DAY).await.unwrap();
    db.insert_hydration_log(user_id, 8, 1, 8, now - DAY).await.unwrap();
    db.insert_coding_session(user_id, 60, None, now - DAY).await.unwrap();
    db.insert_focus_session(user_id, 30, now - DAY).await.unwrap();
    // Outside the window — must not appear.
    db.insert_focus_session(user_id, 99, now - 30 * DAY).await.unwrap();

    let logs = db.window_logs(user_id, now - 7 * DAY).await.unwrap();
    assert_eq!(logs.moods.len(), 1);
    assert_eq!(logs.hydration.len(), 1);
    assert_eq!(logs.coding.len(), 1);
    assert_eq!(logs.focus.len(), 1);
    assert_eq!(logs.focus[0].duration_minutes, 30);
}
