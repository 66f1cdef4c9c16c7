use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::core::error::CoreError;
use crate::models::{DayMeals, MealPlan, PlanStatus};

use super::Database;

struct PlanRow {
    id: String,
    user_id: i64,
    status: String,
    meals: Option<String>,
    dietary_preference: Option<String>,
    calorie_target: Option<i64>,
    customized: bool,
    original_meals: Option<String>,
    error_message: Option<String>,
    created_at: String,
    completed_at: Option<String>,
    edited_at: Option<String>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlanRow> {
    Ok(PlanRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        status: row.get(2)?,
        meals: row.get(3)?,
        dietary_preference: row.get(4)?,
        calorie_target: row.get(5)?,
        customized: row.get(6)?,
        original_meals: row.get(7)?,
        error_message: row.get(8)?,
        created_at: row.get(9)?,
        completed_at: row.get(10)?,
        edited_at: row.get(11)?,
    })
}

fn parse_ts(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

fn parse_opt_ts(s: Option<String>) -> Result<Option<DateTime<Utc>>> {
    s.as_deref().map(parse_ts).transpose()
}

fn into_plan(r: PlanRow) -> Result<MealPlan> {
    let meals: Vec<DayMeals> = match r.meals {
        Some(ref json) => serde_json::from_str(json)?,
        None => Vec::new(),
    };
    let original_meals: Option<Vec<DayMeals>> = match r.original_meals {
        Some(ref json) => Some(serde_json::from_str(json)?),
        None => None,
    };
    Ok(MealPlan {
        id: r.id,
        user_id: r.user_id,
        status: r.status.parse()?,
        meals,
        dietary_preference: r.dietary_preference,
        calorie_target: r.calorie_target,
        customized: r.customized,
        original_meals,
        error_message: r.error_message,
        created_at: parse_ts(&r.created_at)?,
        completed_at: parse_opt_ts(r.completed_at)?,
        edited_at: parse_opt_ts(r.edited_at)?,
    })
}

fn meals_to_json(meals: &[DayMeals]) -> Result<Option<String>> {
    if meals.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(meals)?))
    }
}

const COLUMNS: &str = "id, user_id, status, meals, dietary_preference, calorie_target, \
     customized, original_meals, error_message, created_at, completed_at, edited_at";

impl Database {
    pub fn insert_plan(&self, p: &MealPlan) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meal_plans
                (id, user_id, status, meals, dietary_preference, calorie_target,
                 customized, original_meals, error_message, created_at,
                 completed_at, edited_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                p.id,
                p.user_id,
                p.status.to_string(),
                meals_to_json(&p.meals)?,
                p.dietary_preference,
                p.calorie_target,
                p.customized,
                p.original_meals
                    .as_deref()
                    .map(serde_json::to_string)
                    .transpose()?,
                p.error_message,
                p.created_at.to_rfc3339(),
                p.completed_at.map(|t| t.to_rfc3339()),
                p.edited_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    pub fn get_plan(&self, user_id: i64, plan_id: &str) -> Result<Option<MealPlan>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM meal_plans WHERE id = ?1 AND user_id = ?2"),
                params![plan_id, user_id],
                read_row,
            )
            .optional()?;
        row.map(into_plan).transpose()
    }

    /// The most recently created plan in a given status, if any.
    pub fn latest_plan_with_status(
        &self,
        user_id: i64,
        status: PlanStatus,
    ) -> Result<Option<MealPlan>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM meal_plans
                     WHERE user_id = ?1 AND status = ?2
                     ORDER BY created_at DESC LIMIT 1"
                ),
                params![user_id, status.to_string()],
                read_row,
            )
            .optional()?;
        row.map(into_plan).transpose()
    }

    pub fn list_plans(&self, user_id: i64, limit: i64) -> Result<Vec<MealPlan>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM meal_plans
             WHERE user_id = ?1 ORDER BY created_at DESC LIMIT ?2"
        ))?;
        let rows = stmt.query_map(params![user_id, limit], read_row)?;

        let mut plans = Vec::new();
        for row in rows {
            plans.push(into_plan(row?)?);
        }
        Ok(plans)
    }

    /// Move a plan to a new status, enforcing the lifecycle machine.
    pub fn transition_plan(&self, plan_id: &str, next: PlanStatus) -> Result<()> {
        let current: Option<String> = self
            .conn
            .query_row(
                "SELECT status FROM meal_plans WHERE id = ?1",
                [plan_id],
                |row| row.get(0),
            )
            .optional()?;
        let current: PlanStatus = match current {
            Some(s) => s.parse()?,
            None => {
                return Err(
                    CoreError::NotFound(format!("meal plan {} not found", plan_id)).into(),
                );
            }
        };
        if !current.can_transition(next) {
            return Err(CoreError::Validation(format!(
                "illegal plan transition {} -> {}",
                current, next
            ))
            .into());
        }
        self.conn.execute(
            "UPDATE meal_plans SET status = ?2 WHERE id = ?1",
            params![plan_id, next.to_string()],
        )?;
        Ok(())
    }

    /// Attach generated meals and move a processing plan to completed.
    pub fn complete_plan(&self, plan_id: &str, meals: &[DayMeals]) -> Result<()> {
        self.transition_plan(plan_id, PlanStatus::Completed)?;
        self.conn.execute(
            "UPDATE meal_plans SET meals = ?2, completed_at = ?3 WHERE id = ?1",
            params![
                plan_id,
                meals_to_json(meals)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Park a plan in the terminal failed state with the error message.
    pub fn fail_plan(&self, plan_id: &str, message: &str) -> Result<()> {
        self.transition_plan(plan_id, PlanStatus::Failed)?;
        self.conn.execute(
            "UPDATE meal_plans SET error_message = ?2 WHERE id = ?1",
            params![plan_id, message],
        )?;
        Ok(())
    }

    /// Persist the mutable editing fields of a plan after a swap or replace.
    pub fn save_plan_edits(&self, p: &MealPlan) -> Result<()> {
        self.conn.execute(
            "UPDATE meal_plans
             SET meals = ?2, customized = ?3, original_meals = ?4, edited_at = ?5
             WHERE id = ?1",
            params![
                p.id,
                meals_to_json(&p.meals)?,
                p.customized,
                p.original_meals
                    .as_deref()
                    .map(serde_json::to_string)
                    .transpose()?,
                p.edited_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Delete a plan and detach (not delete) consumption records that
    /// referenced it.
    pub fn delete_plan(&self, plan_id: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE meal_consumptions SET meal_plan_id = NULL WHERE meal_plan_id = ?1",
            [plan_id],
        )?;
        self.conn
            .execute("DELETE FROM meal_plans WHERE id = ?1", [plan_id])?;
        Ok(())
    }
}
