use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use ecowell::core::consumption;
use ecowell::db::Database;
use ecowell::models::MealType;
use ecowell::models::config::Config;
use ecowell::output;
use ecowell::output::human;

pub fn run_mark(
    user_id: i64,
    date: NaiveDate,
    meal_type: &str,
    plan_id: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let meal_type: MealType = meal_type.parse()?;
    let db = Database::open(&Config::db_path())?;
    let record = consumption::mark_consumed(&db, user_id, date, meal_type, plan_id)?;

    if human_flag {
        println!("Marked {} consumed for {}.", meal_type, date);
    } else {
        let out = output::success("meal_mark", json!({ "consumption": record }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_unmark(user_id: i64, date: NaiveDate, meal_type: &str, human_flag: bool) -> Result<()> {
    let meal_type: MealType = meal_type.parse()?;
    let db = Database::open(&Config::db_path())?;
    let record = consumption::unmark_consumed(&db, user_id, date, meal_type)?;

    if human_flag {
        println!("Unmarked {} for {}.", meal_type, date);
    } else {
        let out = output::success("meal_unmark", json!({ "consumption": record }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_status(user_id: i64, date: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let status = consumption::day_status(&db, user_id, date)?;

    if human_flag {
        println!("{}", human::format_day_status(&status));
    } else {
        let out = output::success("meal_status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
