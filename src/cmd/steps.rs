use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use ecowell::core::activity;
use ecowell::db::Database;
use ecowell::models::config::Config;
use ecowell::output;

pub fn run_add(
    user_id: i64,
    date: NaiveDate,
    steps: i64,
    activity_type: Option<&str>,
    duration: Option<f64>,
    human: bool,
) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let update = activity::add_steps(&db, user_id, date, steps, activity_type, duration)?;

    if human {
        println!(
            "Logged {} for {} ({:.2} kcal burned)",
            update.message, date, update.record.calories_burned
        );
    } else {
        let out = output::success(
            "steps_add",
            json!({
                "record": update.record,
                "message": update.message,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(user_id: i64, date: NaiveDate, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let record = db.get_activity(user_id, date)?;

    if human {
        match record {
            Some(ref r) => println!(
                "{}: {} steps, {} min {} ({:.2} kcal)",
                r.date,
                r.steps,
                r.duration_minutes,
                r.activity_type.as_deref().unwrap_or("activity"),
                r.calories_burned
            ),
            None => println!("No activity logged for {}.", date),
        }
    } else {
        let out = output::success("steps_show", json!({ "record": record }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
