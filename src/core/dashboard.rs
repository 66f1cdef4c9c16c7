//! The combined dashboard readout: scores, carbon savings, totals, streak.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::core::{carbon, scoring, streaks};
use crate::db::Database;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub eco_score: f64,
    pub wellness_score: f64,
    pub co2_saved_kg: f64,
    pub calories_burned: f64,
    pub streak_days: u32,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Compose the dashboard for a user. A user with no data at all gets the
/// neutral scores and zeroed counters rather than an error.
pub fn compute(db: &Database, user_id: i64, today: NaiveDate) -> Result<DashboardData> {
    let lifestyle = db.get_lifestyle_profile(user_id)?;
    let health = db.get_health_profile(user_id)?;

    let last_updated = match (&lifestyle, &health) {
        (Some(l), Some(h)) => Some(l.updated_at.max(h.updated_at)),
        (Some(l), None) => Some(l.updated_at),
        (None, Some(h)) => Some(h.updated_at),
        (None, None) => None,
    };

    Ok(DashboardData {
        eco_score: scoring::eco_score(lifestyle.as_ref()),
        wellness_score: scoring::wellness_score(health.as_ref()),
        co2_saved_kg: carbon::carbon_saved(lifestyle.as_ref()),
        calories_burned: db.total_calories_burned(user_id)?,
        streak_days: streaks::combined_streak(db, user_id, today)?,
        last_updated,
    })
}
