#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use ecowell::db::Database;
use ecowell::models::{
    ActivityRecord, HealthProfile, LifestyleProfile, MealConsumption, MealDetail, MealType,
};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// A lifestyle profile with every eco-positive answer.
pub fn green_lifestyle(user_id: i64) -> LifestyleProfile {
    let mut p = LifestyleProfile::new(user_id);
    p.transportation_mode = Some("bike".into());
    p.diet_type = Some("vegan".into());
    p.recycling_habits = Some("always".into());
    p.reusable_items = true;
    p.energy_source = Some("renewable".into());
    p.travel_frequency = Some("rarely".into());
    p.paper_preference = Some("digital".into());
    p
}

/// A fully-filled health profile for a 30-year-old male.
pub fn basic_health(user_id: i64) -> HealthProfile {
    HealthProfile {
        user_id,
        gender: Some("male".into()),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        activity_level: Some("active".into()),
        wellness_goal: Some("maintain_health".into()),
        dietary_preference: Some("vegetarian".into()),
        allergies: Vec::new(),
        medical_conditions: Vec::new(),
        meal_frequency: None,
        cooking_skill: None,
        time_available: None,
        budget: None,
        updated_at: Utc::now(),
    }
}

/// An activity record with the given steps on a date.
pub fn activity_on(user_id: i64, date: NaiveDate, steps: i64) -> ActivityRecord {
    let mut a = ActivityRecord::new(user_id, date);
    a.steps = steps;
    a.calories_burned = (steps as f64 * 0.04 * 100.0).round() / 100.0;
    a
}

/// A consumed meal record on a date.
pub fn consumed_meal(user_id: i64, date: NaiveDate, meal_type: MealType) -> MealConsumption {
    let mut c = MealConsumption::new(user_id, date, meal_type);
    c.consumed = true;
    c.consumed_at = Some(Utc::now());
    c
}

/// A minimal meal with fixed macros, for plan-editing tests.
pub fn sample_meal(name: &str, calories: i64, carbon: f64) -> MealDetail {
    MealDetail {
        name: name.to_string(),
        description: format!("{} (test)", name),
        calories,
        protein: 20,
        carbs: 40,
        fats: 10,
        carbon_footprint: carbon,
        ingredients: vec!["ingredient".to_string()],
        cooking_time: 10,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
