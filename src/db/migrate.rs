use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS lifestyle_profiles (
            user_id             INTEGER PRIMARY KEY,
            transportation_mode TEXT,
            diet_type           TEXT,
            shopping_pattern    TEXT,
            recycling_habits    TEXT,
            reusable_items      INTEGER NOT NULL DEFAULT 0,
            energy_source       TEXT,
            travel_frequency    TEXT,
            paper_preference    TEXT,
            updated_at          TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS health_profiles (
            user_id            INTEGER PRIMARY KEY,
            gender             TEXT,
            age                INTEGER,
            height_cm          REAL,
            weight_kg          REAL,
            activity_level     TEXT,
            wellness_goal      TEXT,
            dietary_preference TEXT,
            allergies          TEXT,
            medical_conditions TEXT,
            meal_frequency     TEXT,
            cooking_skill      TEXT,
            time_available     TEXT,
            budget             TEXT,
            updated_at         TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS activity_records (
            id               TEXT PRIMARY KEY,
            user_id          INTEGER NOT NULL,
            date             TEXT NOT NULL,
            steps            INTEGER NOT NULL DEFAULT 0,
            duration_minutes REAL NOT NULL DEFAULT 0,
            activity_type    TEXT,
            calories_burned  REAL NOT NULL DEFAULT 0,
            UNIQUE(user_id, date)
        );
        CREATE INDEX IF NOT EXISTS idx_activity_user_date
            ON activity_records(user_id, date);

        CREATE TABLE IF NOT EXISTS meal_consumptions (
            id           TEXT PRIMARY KEY,
            user_id      INTEGER NOT NULL,
            meal_plan_id TEXT,
            date         TEXT NOT NULL,
            meal_type    TEXT NOT NULL,
            consumed     INTEGER NOT NULL DEFAULT 0,
            consumed_at  TEXT,
            UNIQUE(user_id, date, meal_type)
        );
        CREATE INDEX IF NOT EXISTS idx_consumption_user_date
            ON meal_consumptions(user_id, date);

        CREATE TABLE IF NOT EXISTS meal_plans (
            id                 TEXT PRIMARY KEY,
            user_id            INTEGER NOT NULL,
            status             TEXT NOT NULL DEFAULT 'pending',
            meals              TEXT,
            dietary_preference TEXT,
            calorie_target     INTEGER,
            customized         INTEGER NOT NULL DEFAULT 0,
            original_meals     TEXT,
            error_message      TEXT,
            created_at         TEXT NOT NULL,
            completed_at       TEXT,
            edited_at          TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_plans_user_created
            ON meal_plans(user_id, created_at);",
    )?;
    Ok(())
}
