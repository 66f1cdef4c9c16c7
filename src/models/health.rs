use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health and wellness attributes for one user. One row per user, upserted
/// on each submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthProfile {
    pub user_id: i64,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub wellness_goal: Option<String>,
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    pub meal_frequency: Option<String>,
    pub cooking_skill: Option<String>,
    pub time_available: Option<String>,
    pub budget: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl HealthProfile {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            updated_at: Utc::now(),
            ..Self::default()
        }
    }
}
