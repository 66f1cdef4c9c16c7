pub mod activity;
pub mod config;
pub mod consumption;
pub mod health;
pub mod lifestyle;
pub mod plan;

pub use activity::ActivityRecord;
pub use consumption::MealConsumption;
pub use health::HealthProfile;
pub use lifestyle::LifestyleProfile;
pub use plan::{DayMeals, MealDetail, MealPlan, MealType, PlanStatus};
