use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

use crate::models::ActivityRecord;

use super::Database;

fn row_to_activity(row: &rusqlite::Row<'_>) -> rusqlite::Result<(ActivityRecord, String)> {
    Ok((
        ActivityRecord {
            id: row.get(0)?,
            user_id: row.get(1)?,
            date: NaiveDate::default(), // replaced by the caller from the raw string
            steps: row.get(3)?,
            duration_minutes: row.get(4)?,
            activity_type: row.get(5)?,
            calories_burned: row.get(6)?,
        },
        row.get::<_, String>(2)?,
    ))
}

fn finish(pair: (ActivityRecord, String)) -> Result<ActivityRecord> {
    let (mut record, date) = pair;
    record.date = date.parse()?;
    Ok(record)
}

impl Database {
    pub fn upsert_activity(&self, a: &ActivityRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO activity_records
                (id, user_id, date, steps, duration_minutes, activity_type, calories_burned)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id, date) DO UPDATE SET
                steps = excluded.steps,
                duration_minutes = excluded.duration_minutes,
                activity_type = excluded.activity_type,
                calories_burned = excluded.calories_burned",
            params![
                a.id,
                a.user_id,
                a.date.to_string(),
                a.steps,
                a.duration_minutes,
                a.activity_type,
                a.calories_burned,
            ],
        )?;
        Ok(())
    }

    pub fn get_activity(&self, user_id: i64, date: NaiveDate) -> Result<Option<ActivityRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, user_id, date, steps, duration_minutes, activity_type, calories_burned
                 FROM activity_records WHERE user_id = ?1 AND date = ?2",
                params![user_id, date.to_string()],
                row_to_activity,
            )
            .optional()?;
        row.map(finish).transpose()
    }

    /// Activities in [from, to], ascending by date.
    pub fn activities_in_range(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ActivityRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, date, steps, duration_minutes, activity_type, calories_burned
             FROM activity_records
             WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
             ORDER BY date",
        )?;
        let rows = stmt.query_map(
            params![user_id, from.to_string(), to.to_string()],
            row_to_activity,
        )?;

        let mut records = Vec::new();
        for row in rows {
            records.push(finish(row?)?);
        }
        Ok(records)
    }

    /// Distinct activity dates for a user, newest first.
    pub fn activity_dates_desc(&self, user_id: i64) -> Result<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT date FROM activity_records
             WHERE user_id = ?1 ORDER BY date DESC",
        )?;
        let rows = stmt.query_map([user_id], |row| row.get::<_, String>(0))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(row?.parse()?);
        }
        Ok(dates)
    }

    /// Lifetime calories burned across all activities, 0.0 when none.
    pub fn total_calories_burned(&self, user_id: i64) -> Result<f64> {
        let total: Option<f64> = self.conn.query_row(
            "SELECT SUM(calories_burned) FROM activity_records WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )?;
        Ok((total.unwrap_or(0.0) * 100.0).round() / 100.0)
    }
}
