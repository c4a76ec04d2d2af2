/// Inline SQL migrations for the DevWell database schema.
///
/// We use simple inline migrations rather than sqlx migration files
/// because the schema is small and self-contained.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: users table
    r#"
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);
"#,
    // Migration 2: mood_logs table
    r#"
CREATE TABLE IF NOT EXISTS mood_logs (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id         INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    mood_score      REAL NOT NULL CHECK (mood_score >= 0 AND mood_score <= 5),
    tiredness_level INTEGER CHECK (tiredness_level IS NULL OR (tiredness_level >= 0 AND tiredness_level <= 10)),
    notes           TEXT,
    created_at      INTEGER NOT NULL
);
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_mood_logs_user_created ON mood_logs(user_id, created_at);"#,
    // Migration 3: hydration_logs table
    r#"
CREATE TABLE IF NOT EXISTS hydration_logs (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id       INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    water_glasses INTEGER NOT NULL CHECK (water_glasses >= 0),
    coffee_cups   INTEGER NOT NULL DEFAULT 0 CHECK (coffee_cups >= 0),
    daily_goal    INTEGER NOT NULL DEFAULT 8 CHECK (daily_goal >= 0),
    created_at    INTEGER NOT NULL
);
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_hydration_logs_user_created ON hydration_logs(user_id, created_at);"#,
    // Migration 4: coding_sessions table
    r#"
CREATE TABLE IF NOT EXISTS coding_sessions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    duration_minutes INTEGER NOT NULL CHECK (duration_minutes >= 0),
    notes            TEXT,
    created_at       INTEGER NOT NULL
);
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_coding_sessions_user_created ON coding_sessions(user_id, created_at);"#,
    // Migration 5: focus_sessions table
    r#"
CREATE TABLE IF NOT EXISTS focus_sessions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    duration_minutes INTEGER NOT NULL CHECK (duration_minutes >= 0),
    created_at       INTEGER NOT NULL
);
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_focus_sessions_user_created ON focus_sessions(user_id, created_at);"#,
    // Migration 6: user_profiles table (one row per user)
    r#"
CREATE TABLE IF NOT EXISTS user_profiles (
    user_id            INTEGER PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
    nickname           TEXT,
    timezone           TEXT,
    work_hours_start   TEXT,
    work_hours_end     TEXT,
    coding_style       TEXT,
    wellness_goals     TEXT NOT NULL DEFAULT '[]',
    diet_preference    TEXT NOT NULL DEFAULT 'balanced',
    reminder_frequency TEXT,
    age                INTEGER,
    weight             REAL,
    created_at         INTEGER NOT NULL
);
"#,
];
