use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{OptionalExtension, params};

use crate::models::{MealConsumption, MealType};

use super::Database;

struct ConsumptionRow {
    id: String,
    user_id: i64,
    meal_plan_id: Option<String>,
    date: String,
    meal_type: String,
    consumed: bool,
    consumed_at: Option<String>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ConsumptionRow> {
    Ok(ConsumptionRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        meal_plan_id: row.get(2)?,
        date: row.get(3)?,
        meal_type: row.get(4)?,
        consumed: row.get(5)?,
        consumed_at: row.get(6)?,
    })
}

fn into_consumption(r: ConsumptionRow) -> Result<MealConsumption> {
    let consumed_at = match r.consumed_at {
        Some(ref s) => Some(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc)),
        None => None,
    };
    Ok(MealConsumption {
        id: r.id,
        user_id: r.user_id,
        meal_plan_id: r.meal_plan_id,
        date: r.date.parse()?,
        meal_type: r.meal_type.parse()?,
        consumed: r.consumed,
        consumed_at,
    })
}

const COLUMNS: &str = "id, user_id, meal_plan_id, date, meal_type, consumed, consumed_at";

impl Database {
    pub fn upsert_consumption(&self, c: &MealConsumption) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meal_consumptions
                (id, user_id, meal_plan_id, date, meal_type, consumed, consumed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id, date, meal_type) DO UPDATE SET
                meal_plan_id = excluded.meal_plan_id,
                consumed = excluded.consumed,
                consumed_at = excluded.consumed_at",
            params![
                c.id,
                c.user_id,
                c.meal_plan_id,
                c.date.to_string(),
                c.meal_type.to_string(),
                c.consumed,
                c.consumed_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    pub fn get_consumption(
        &self,
        user_id: i64,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<Option<MealConsumption>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM meal_consumptions
                     WHERE user_id = ?1 AND date = ?2 AND meal_type = ?3"
                ),
                params![user_id, date.to_string(), meal_type.to_string()],
                read_row,
            )
            .optional()?;
        row.map(into_consumption).transpose()
    }

    pub fn consumptions_on(&self, user_id: i64, date: NaiveDate) -> Result<Vec<MealConsumption>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM meal_consumptions
             WHERE user_id = ?1 AND date = ?2"
        ))?;
        let rows = stmt.query_map(params![user_id, date.to_string()], read_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(into_consumption(row?)?);
        }
        Ok(out)
    }

    pub fn consumptions_in_range(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MealConsumption>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM meal_consumptions
             WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
             ORDER BY date"
        ))?;
        let rows = stmt.query_map(
            params![user_id, from.to_string(), to.to_string()],
            read_row,
        )?;

        let mut out = Vec::new();
        for row in rows {
            out.push(into_consumption(row?)?);
        }
        Ok(out)
    }

    /// Dates on which all three meals were marked consumed, newest first.
    pub fn complete_meal_dates(&self, user_id: i64) -> Result<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT date FROM meal_consumptions
             WHERE user_id = ?1 AND consumed = 1
             GROUP BY date
             HAVING COUNT(DISTINCT meal_type) = 3
             ORDER BY date DESC",
        )?;
        let rows = stmt.query_map([user_id], |row| row.get::<_, String>(0))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(row?.parse()?);
        }
        Ok(dates)
    }
}
