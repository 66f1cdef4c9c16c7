use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::MealType;

/// Whether one meal slot on one day was eaten. Unique per
/// (user_id, date, meal_type). The plan reference is nullable so a logged
/// meal survives deletion of the plan it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealConsumption {
    pub id: String,
    pub user_id: i64,
    pub meal_plan_id: Option<String>,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub consumed: bool,
    pub consumed_at: Option<DateTime<Utc>>,
}

impl MealConsumption {
    pub fn new(user_id: i64, date: NaiveDate, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            meal_plan_id: None,
            date,
            meal_type,
            consumed: false,
            consumed_at: None,
        }
    }
}
