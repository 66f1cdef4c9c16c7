//! Meal-plan lifecycle: synchronous generation, the auto-generate side
//! channel, read-time summaries, deletion.

use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;

use crate::core::catalog::FALLBACK_DIET;
use crate::core::error::CoreError;
use crate::core::insights::DEFAULT_CALORIE_TARGET;
use crate::core::planner;
use crate::db::Database;
use crate::models::{MealPlan, PlanStatus};

#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub dietary_preference: Option<String>,
    pub calorie_target: Option<i64>,
    pub exclude_ingredients: Vec<String>,
}

/// Resolve the diet for a generation request: explicit preference, then the
/// lifestyle profile's diet type, then the balanced fallback.
pub fn resolve_diet(db: &Database, user_id: i64, requested: Option<&str>) -> Result<String> {
    if let Some(d) = requested
        && !d.is_empty()
    {
        return Ok(d.to_string());
    }
    let lifestyle = db.get_lifestyle_profile(user_id)?;
    Ok(lifestyle
        .and_then(|l| l.diet_type)
        .unwrap_or_else(|| FALLBACK_DIET.to_string()))
}

/// Resolve the calorie target: explicit request, then the health profile's
/// computed target, then the default. An uncomputable target is not an
/// error.
pub fn resolve_calorie_target(db: &Database, user_id: i64, requested: Option<i64>) -> Result<i64> {
    if let Some(t) = requested {
        return Ok(t);
    }
    let health = db.get_health_profile(user_id)?;
    let computed = health.and_then(|h| {
        crate::core::energy::calorie_target(
            h.weight_kg?,
            h.height_cm?,
            h.age?,
            h.gender.as_deref()?,
            h.activity_level.as_deref().unwrap_or(""),
            h.wellness_goal.as_deref(),
        )
    });
    Ok(computed.map(|t| t as i64).unwrap_or(DEFAULT_CALORIE_TARGET))
}

/// Generate and store a completed 7-day plan inline (no job handoff).
pub fn generate_sync(
    db: &Database,
    user_id: i64,
    request: GenerateRequest,
    rng: &mut impl Rng,
) -> Result<MealPlan> {
    let diet = resolve_diet(db, user_id, request.dietary_preference.as_deref())?;
    let target = resolve_calorie_target(db, user_id, request.calorie_target)?;

    let meals = planner::generate_week(&diet, &request.exclude_ingredients, rng);

    let mut plan = MealPlan::new(user_id, Some(diet), Some(target));
    plan.status = PlanStatus::Completed;
    plan.meals = meals;
    plan.completed_at = Some(Utc::now());

    db.insert_plan(&plan)?;
    Ok(plan)
}

/// Fire-and-forget generation after a health submission. The caller reports
/// a failure on its side channel and carries on; the submission result never
/// depends on this.
pub fn auto_generate(
    db: &Database,
    user_id: i64,
    dietary_preference: Option<&str>,
    rng: &mut impl Rng,
) -> Result<MealPlan> {
    generate_sync(
        db,
        user_id,
        GenerateRequest {
            dietary_preference: dietary_preference.map(String::from),
            calorie_target: Some(DEFAULT_CALORIE_TARGET),
            exclude_ingredients: Vec::new(),
        },
        rng,
    )
}

#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub total_calories_week: i64,
    pub total_carbon_week: f64,
    pub avg_calories_day: i64,
}

/// Read-time weekly totals for a completed plan with meals.
pub fn summarize(plan: &MealPlan) -> Option<PlanSummary> {
    if plan.status != PlanStatus::Completed || plan.meals.is_empty() {
        return None;
    }
    let total_calories_week: i64 = plan.meals.iter().map(|d| d.total_calories).sum();
    let total_carbon_week: f64 = plan.meals.iter().map(|d| d.total_carbon).sum();
    Some(PlanSummary {
        total_calories_week,
        total_carbon_week: (total_carbon_week * 100.0).round() / 100.0,
        avg_calories_day: total_calories_week / 7,
    })
}

/// Fetch a plan owned by the user, or a NotFound error.
pub fn get_plan(db: &Database, user_id: i64, plan_id: &str) -> Result<MealPlan> {
    db.get_plan(user_id, plan_id)?
        .ok_or_else(|| CoreError::NotFound(format!("meal plan {} not found", plan_id)).into())
}

/// Delete a plan. Consumption records that referenced it are detached, not
/// removed.
pub fn delete_plan(db: &Database, user_id: i64, plan_id: &str) -> Result<()> {
    if db.get_plan(user_id, plan_id)?.is_none() {
        return Err(CoreError::NotFound(format!("meal plan {} not found", plan_id)).into());
    }
    db.delete_plan(plan_id)
}
