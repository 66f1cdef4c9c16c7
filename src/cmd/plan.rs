use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use ecowell::core::error::CoreError;
use ecowell::core::{editing, planner, plans};
use ecowell::db::Database;
use ecowell::jobs::{self, GenerateJob};
use ecowell::models::config::Config;
use ecowell::models::{MealPlan, MealType, PlanStatus};
use ecowell::output;
use ecowell::output::human;

fn split_excludes(s: Option<&str>) -> Vec<String> {
    s.map(|s| {
        s.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run_generate(
    user_id: i64,
    diet: Option<&str>,
    calories: Option<i64>,
    exclude: Option<&str>,
    background: bool,
    seed: Option<u64>,
    human_flag: bool,
) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let exclude_ingredients = split_excludes(exclude);

    if background {
        let diet = plans::resolve_diet(&db, user_id, diet)?;
        let target = plans::resolve_calorie_target(&db, user_id, calories)?;

        let plan = MealPlan::new(user_id, Some(diet.clone()), Some(target));
        db.insert_plan(&plan)?;

        let handle = jobs::dispatch(GenerateJob {
            db_path: Config::db_path(),
            plan_id: plan.id.clone(),
            user_id,
            dietary_preference: diet,
            calorie_target: target,
            exclude_ingredients,
            rng_seed: seed,
        });

        if human_flag {
            println!("Plan {} queued for generation.", handle.plan_id());
        } else {
            let out = output::success(
                "plan_generate",
                json!({ "plan_id": handle.plan_id(), "status": PlanStatus::Pending }),
            );
            println!("{}", serde_json::to_string(&out)?);
        }

        // The process is the worker's runtime; leaving before it finishes
        // would abandon the plan in processing.
        handle.wait();
        return Ok(());
    }

    let mut rng = rng_from(seed);
    let plan = plans::generate_sync(
        &db,
        user_id,
        plans::GenerateRequest {
            dietary_preference: diet.map(String::from),
            calorie_target: calories,
            exclude_ingredients,
        },
        &mut rng,
    )?;
    let summary = plans::summarize(&plan);

    if human_flag {
        println!("{}", human::format_plan(&plan, summary.as_ref()));
    } else {
        let out = output::success(
            "plan_generate",
            json!({ "plan": plan, "summary": summary }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(user_id: i64, plan_id: Option<&str>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let plan = match plan_id {
        Some(id) => plans::get_plan(&db, user_id, id)?,
        None => db
            .latest_plan_with_status(user_id, PlanStatus::Completed)?
            .ok_or_else(|| CoreError::NotFound("no completed meal plan yet".to_string()))?,
    };
    let summary = plans::summarize(&plan);

    if human_flag {
        println!("{}", human::format_plan(&plan, summary.as_ref()));
    } else {
        let out = output::success("plan_show", json!({ "plan": plan, "summary": summary }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(user_id: i64, last: i64, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let plans = db.list_plans(user_id, last)?;

    if human_flag {
        if plans.is_empty() {
            println!("No meal plans for user {}.", user_id);
        }
        for p in &plans {
            println!("{}", human::format_plan_line(p));
        }
    } else {
        let out = output::success("plan_list", json!({ "plans": plans }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_swap(
    user_id: i64,
    plan_id: &str,
    day: u8,
    meal: &str,
    with: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    if !(1..=7).contains(&day) {
        return Err(CoreError::Validation(format!("day must be 1-7, got {}", day)).into());
    }
    let meal_type: MealType = meal.parse()?;

    let db = Database::open(&Config::db_path())?;
    let mut plan = plans::get_plan(&db, user_id, plan_id)?;
    if plan.status != PlanStatus::Completed {
        return Err(CoreError::Validation(format!(
            "only completed plans can be edited (plan is {})",
            plan.status
        ))
        .into());
    }

    let day_index = usize::from(day) - 1;
    let current_name = plan
        .meals
        .get(day_index)
        .map(|d| d.meal(meal_type).name.clone())
        .ok_or_else(|| CoreError::Validation(format!("plan has no day {}", day)))?;

    let diet = plan
        .dietary_preference
        .clone()
        .unwrap_or_else(|| ecowell::core::catalog::FALLBACK_DIET.to_string());
    let candidates = planner::alternatives(meal_type, &diet, &[current_name.clone()]);

    let replacement = match with {
        Some(name) => candidates
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                CoreError::NotFound(format!("no alternative {} named '{}'", meal_type, name))
            })?,
        None => candidates
            .first()
            .cloned()
            .ok_or_else(|| {
                CoreError::NotFound(format!("no alternatives available for {}", meal_type))
            })?,
    };

    editing::swap_meal(&mut plan, day_index, meal_type, replacement.clone())?;
    db.save_plan_edits(&plan)?;

    if human_flag {
        println!(
            "Swapped day {} {}: {} -> {}",
            day, meal_type, current_name, replacement.name
        );
    } else {
        let out = output::success(
            "plan_swap",
            json!({
                "plan_id": plan.id,
                "day": day,
                "meal_type": meal_type,
                "previous": current_name,
                "replacement": replacement,
                "plan": plan,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_status(user_id: i64, plan_id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let plan = plans::get_plan(&db, user_id, plan_id)?;

    if human_flag {
        print!("Plan {}: {}", plan.id, plan.status);
        if let Some(ref msg) = plan.error_message {
            print!(" ({})", msg);
        }
        println!();
    } else {
        let out = output::success(
            "plan_status",
            json!({
                "plan_id": plan.id,
                "status": plan.status,
                "error_message": plan.error_message,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_delete(user_id: i64, plan_id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    plans::delete_plan(&db, user_id, plan_id)?;

    if human_flag {
        println!("Deleted plan {}.", plan_id);
    } else {
        let out = output::success("plan_delete", json!({ "plan_id": plan_id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
