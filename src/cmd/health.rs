use anyhow::Result;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use ecowell::core::{energy, plans, scoring};
use ecowell::db::Database;
use ecowell::models::HealthProfile;
use ecowell::models::config::Config;
use ecowell::output;

pub struct SetArgs {
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub diet: Option<String>,
    pub allergies: Option<String>,
    pub conditions: Option<String>,
    pub meal_frequency: Option<String>,
    pub cooking_skill: Option<String>,
    pub time_available: Option<String>,
    pub budget: Option<String>,
    pub no_plan: bool,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn run_set(user_id: i64, args: SetArgs, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let mut profile = db
        .get_health_profile(user_id)?
        .unwrap_or_else(|| HealthProfile::new(user_id));

    if args.gender.is_some() {
        profile.gender = args.gender;
    }
    if args.age.is_some() {
        profile.age = args.age;
    }
    if args.height.is_some() {
        profile.height_cm = args.height;
    }
    if args.weight.is_some() {
        profile.weight_kg = args.weight;
    }
    if args.activity_level.is_some() {
        profile.activity_level = args.activity_level;
    }
    if args.goal.is_some() {
        profile.wellness_goal = args.goal;
    }
    if args.diet.is_some() {
        profile.dietary_preference = args.diet;
    }
    if let Some(ref allergies) = args.allergies {
        profile.allergies = split_list(allergies);
    }
    if let Some(ref conditions) = args.conditions {
        profile.medical_conditions = split_list(conditions);
    }
    if args.meal_frequency.is_some() {
        profile.meal_frequency = args.meal_frequency;
    }
    if args.cooking_skill.is_some() {
        profile.cooking_skill = args.cooking_skill;
    }
    if args.time_available.is_some() {
        profile.time_available = args.time_available;
    }
    if args.budget.is_some() {
        profile.budget = args.budget;
    }
    profile.updated_at = Utc::now();

    db.upsert_health_profile(&profile)?;

    // A starter plan rides along with the submission; its failure never
    // fails the submission itself.
    let mut auto_plan_id = None;
    if !args.no_plan {
        let mut rng = StdRng::from_entropy();
        match plans::auto_generate(&db, user_id, profile.dietary_preference.as_deref(), &mut rng) {
            Ok(plan) => auto_plan_id = Some(plan.id),
            Err(e) => {
                let err = output::error("health_set", "generation_failed", &e.to_string());
                eprintln!("{}", serde_json::to_string(&err)?);
            }
        }
    }

    let wellness_score = scoring::wellness_score(Some(&profile));

    if human {
        println!("Health profile saved. Wellness score: {:.1}/100", wellness_score);
        if let Some(ref id) = auto_plan_id {
            println!("Starter meal plan generated: {}", id);
        }
    } else {
        let out = output::success(
            "health_set",
            json!({
                "profile": profile,
                "wellness_score": wellness_score,
                "auto_plan_id": auto_plan_id,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(user_id: i64, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let profile = db.get_health_profile(user_id)?;

    let wellness_score = scoring::wellness_score(profile.as_ref());

    let derived = profile.as_ref().and_then(|p| {
        let weight = p.weight_kg?;
        let height = p.height_cm?;
        let bmi = energy::bmi(weight, height)?;
        let bmr = energy::bmr(weight, height, p.age?, p.gender.as_deref()?)?;
        let tdee = energy::tdee(bmr, p.activity_level.as_deref().unwrap_or(""))?;
        let target = energy::calorie_target(
            weight,
            height,
            p.age?,
            p.gender.as_deref()?,
            p.activity_level.as_deref().unwrap_or(""),
            p.wellness_goal.as_deref(),
        )?;
        Some(json!({
            "bmi": bmi,
            "bmi_category": energy::bmi_category(bmi),
            "bmr": bmr,
            "tdee": tdee,
            "calorie_target": target,
        }))
    });

    if human {
        match profile {
            Some(ref p) => {
                println!("=== Health Profile (user {}) ===", user_id);
                println!("Gender: {} | Age: {}",
                    p.gender.as_deref().unwrap_or("-"),
                    p.age.map_or("-".to_string(), |a| a.to_string()));
                println!("Height: {} cm | Weight: {} kg",
                    p.height_cm.map_or("-".to_string(), |h| h.to_string()),
                    p.weight_kg.map_or("-".to_string(), |w| w.to_string()));
                println!("Activity: {} | Goal: {} | Diet: {}",
                    p.activity_level.as_deref().unwrap_or("-"),
                    p.wellness_goal.as_deref().unwrap_or("-"),
                    p.dietary_preference.as_deref().unwrap_or("-"));
                println!("Wellness score: {:.1}/100", wellness_score);
                if let Some(ref d) = derived {
                    println!(
                        "BMI: {} ({}) | BMR: {} | TDEE: {} | Target: {} kcal/day",
                        d["bmi"], d["bmi_category"].as_str().unwrap_or("?"),
                        d["bmr"], d["tdee"], d["calorie_target"]
                    );
                }
            }
            None => println!("No health profile for user {}.", user_id),
        }
    } else {
        let out = output::success(
            "health_show",
            json!({
                "profile": profile,
                "wellness_score": wellness_score,
                "derived": derived,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
