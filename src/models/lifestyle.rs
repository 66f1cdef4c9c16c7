use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Environmental lifestyle choices for one user. Every categorical field is
/// optional free-form text; the scoring tables treat unrecognized values as a
/// zero contribution rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifestyleProfile {
    pub user_id: i64,
    pub transportation_mode: Option<String>,
    pub diet_type: Option<String>,
    pub shopping_pattern: Option<String>,
    pub recycling_habits: Option<String>,
    pub reusable_items: bool,
    pub energy_source: Option<String>,
    pub travel_frequency: Option<String>,
    pub paper_preference: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl LifestyleProfile {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            updated_at: Utc::now(),
            ..Self::default()
        }
    }
}
