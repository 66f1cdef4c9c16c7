use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of activity for one user. The (user_id, date) pair is unique;
/// the steps upsert path updates in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub user_id: i64,
    pub date: NaiveDate,
    pub steps: i64,
    pub duration_minutes: f64,
    pub activity_type: Option<String>,
    pub calories_burned: f64,
}

impl ActivityRecord {
    pub fn new(user_id: i64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            date,
            steps: 0,
            duration_minutes: 0.0,
            activity_type: None,
            calories_burned: 0.0,
        }
    }
}
