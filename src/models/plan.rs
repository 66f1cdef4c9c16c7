use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
        }
    }
}

impl FromStr for MealType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => anyhow::bail!("invalid meal type: {} (expected breakfast/lunch/dinner)", s),
        }
    }
}

/// Lifecycle state of a meal plan. The only legal transitions are
/// pending -> processing, processing -> completed and processing -> failed;
/// a failed plan is terminal and can only be replaced by a new request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PlanStatus {
    pub fn can_transition(self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Completed)
                | (Self::Processing, Self::Failed)
        )
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for PlanStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => anyhow::bail!("invalid plan status: {}", s),
        }
    }
}

/// A single meal from the catalog, with its nutritional and carbon data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealDetail {
    pub name: String,
    pub description: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub carbon_footprint: f64,
    pub ingredients: Vec<String>,
    pub cooking_time: i64,
}

/// One day of a 7-day plan: three meal slots plus derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayMeals {
    pub day: u8,
    pub date: NaiveDate,
    pub breakfast: MealDetail,
    pub lunch: MealDetail,
    pub dinner: MealDetail,
    pub total_calories: i64,
    pub total_carbon: f64,
}

impl DayMeals {
    pub fn meal(&self, meal_type: MealType) -> &MealDetail {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, meal_type: MealType) -> &mut MealDetail {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }

    /// Recompute day totals from the three slots. Carbon is kept at two
    /// decimals to match the stored representation.
    pub fn recompute_totals(&mut self) {
        self.total_calories =
            self.breakfast.calories + self.lunch.calories + self.dinner.calories;
        let carbon = self.breakfast.carbon_footprint
            + self.lunch.carbon_footprint
            + self.dinner.carbon_footprint;
        self.total_carbon = (carbon * 100.0).round() / 100.0;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    pub user_id: i64,
    pub status: PlanStatus,
    #[serde(default)]
    pub meals: Vec<DayMeals>,
    pub dietary_preference: Option<String>,
    pub calorie_target: Option<i64>,
    pub customized: bool,
    pub original_meals: Option<Vec<DayMeals>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub edited_at: Option<DateTime<Utc>>,
}

impl MealPlan {
    pub fn new(user_id: i64, dietary_preference: Option<String>, calorie_target: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            status: PlanStatus::Pending,
            meals: Vec::new(),
            dietary_preference,
            calorie_target,
            customized: false,
            original_meals: None,
            error_message: None,
            created_at: Utc::now(),
            completed_at: None,
            edited_at: None,
        }
    }
}
