use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::models::{HealthProfile, LifestyleProfile};

use super::Database;

fn parse_ts(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

fn list_to_json(items: &[String]) -> Result<Option<String>> {
    if items.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(items)?))
    }
}

fn json_to_list(json: Option<String>) -> Vec<String> {
    match json {
        Some(ref s) => serde_json::from_str(s).unwrap_or_default(),
        None => Vec::new(),
    }
}

impl Database {
    pub fn upsert_lifestyle_profile(&self, p: &LifestyleProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO lifestyle_profiles
                (user_id, transportation_mode, diet_type, shopping_pattern,
                 recycling_habits, reusable_items, energy_source,
                 travel_frequency, paper_preference, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(user_id) DO UPDATE SET
                transportation_mode = excluded.transportation_mode,
                diet_type = excluded.diet_type,
                shopping_pattern = excluded.shopping_pattern,
                recycling_habits = excluded.recycling_habits,
                reusable_items = excluded.reusable_items,
                energy_source = excluded.energy_source,
                travel_frequency = excluded.travel_frequency,
                paper_preference = excluded.paper_preference,
                updated_at = excluded.updated_at",
            params![
                p.user_id,
                p.transportation_mode,
                p.diet_type,
                p.shopping_pattern,
                p.recycling_habits,
                p.reusable_items,
                p.energy_source,
                p.travel_frequency,
                p.paper_preference,
                p.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_lifestyle_profile(&self, user_id: i64) -> Result<Option<LifestyleProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT user_id, transportation_mode, diet_type, shopping_pattern,
                        recycling_habits, reusable_items, energy_source,
                        travel_frequency, paper_preference, updated_at
                 FROM lifestyle_profiles WHERE user_id = ?1",
                [user_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, bool>(5)?,
                        row.get::<_, Option<String>>(6)?,
                        row.get::<_, Option<String>>(7)?,
                        row.get::<_, Option<String>>(8)?,
                        row.get::<_, String>(9)?,
                    ))
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((
                user_id,
                transportation_mode,
                diet_type,
                shopping_pattern,
                recycling_habits,
                reusable_items,
                energy_source,
                travel_frequency,
                paper_preference,
                updated_at,
            )) => Ok(Some(LifestyleProfile {
                user_id,
                transportation_mode,
                diet_type,
                shopping_pattern,
                recycling_habits,
                reusable_items,
                energy_source,
                travel_frequency,
                paper_preference,
                updated_at: parse_ts(&updated_at)?,
            })),
        }
    }

    pub fn upsert_health_profile(&self, p: &HealthProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO health_profiles
                (user_id, gender, age, height_cm, weight_kg, activity_level,
                 wellness_goal, dietary_preference, allergies,
                 medical_conditions, meal_frequency, cooking_skill,
                 time_available, budget, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
             ON CONFLICT(user_id) DO UPDATE SET
                gender = excluded.gender,
                age = excluded.age,
                height_cm = excluded.height_cm,
                weight_kg = excluded.weight_kg,
                activity_level = excluded.activity_level,
                wellness_goal = excluded.wellness_goal,
                dietary_preference = excluded.dietary_preference,
                allergies = excluded.allergies,
                medical_conditions = excluded.medical_conditions,
                meal_frequency = excluded.meal_frequency,
                cooking_skill = excluded.cooking_skill,
                time_available = excluded.time_available,
                budget = excluded.budget,
                updated_at = excluded.updated_at",
            params![
                p.user_id,
                p.gender,
                p.age,
                p.height_cm,
                p.weight_kg,
                p.activity_level,
                p.wellness_goal,
                p.dietary_preference,
                list_to_json(&p.allergies)?,
                list_to_json(&p.medical_conditions)?,
                p.meal_frequency,
                p.cooking_skill,
                p.time_available,
                p.budget,
                p.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_health_profile(&self, user_id: i64) -> Result<Option<HealthProfile>> {
        struct HealthRow {
            user_id: i64,
            gender: Option<String>,
            age: Option<i64>,
            height_cm: Option<f64>,
            weight_kg: Option<f64>,
            activity_level: Option<String>,
            wellness_goal: Option<String>,
            dietary_preference: Option<String>,
            allergies: Option<String>,
            medical_conditions: Option<String>,
            meal_frequency: Option<String>,
            cooking_skill: Option<String>,
            time_available: Option<String>,
            budget: Option<String>,
            updated_at: String,
        }

        let row = self
            .conn
            .query_row(
                "SELECT user_id, gender, age, height_cm, weight_kg,
                        activity_level, wellness_goal, dietary_preference,
                        allergies, medical_conditions, meal_frequency,
                        cooking_skill, time_available, budget, updated_at
                 FROM health_profiles WHERE user_id = ?1",
                [user_id],
                |row| {
                    Ok(HealthRow {
                        user_id: row.get(0)?,
                        gender: row.get(1)?,
                        age: row.get(2)?,
                        height_cm: row.get(3)?,
                        weight_kg: row.get(4)?,
                        activity_level: row.get(5)?,
                        wellness_goal: row.get(6)?,
                        dietary_preference: row.get(7)?,
                        allergies: row.get(8)?,
                        medical_conditions: row.get(9)?,
                        meal_frequency: row.get(10)?,
                        cooking_skill: row.get(11)?,
                        time_available: row.get(12)?,
                        budget: row.get(13)?,
                        updated_at: row.get(14)?,
                    })
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some(r) => Ok(Some(HealthProfile {
                user_id: r.user_id,
                gender: r.gender,
                age: r.age,
                height_cm: r.height_cm,
                weight_kg: r.weight_kg,
                activity_level: r.activity_level,
                wellness_goal: r.wellness_goal,
                dietary_preference: r.dietary_preference,
                allergies: json_to_list(r.allergies),
                medical_conditions: json_to_list(r.medical_conditions),
                meal_frequency: r.meal_frequency,
                cooking_skill: r.cooking_skill,
                time_available: r.time_available,
                budget: r.budget,
                updated_at: parse_ts(&r.updated_at)?,
            })),
        }
    }
}
