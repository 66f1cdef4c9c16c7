use anyhow::Result;
use chrono::NaiveDate;

use ecowell::core::insights;
use ecowell::db::Database;
use ecowell::models::config::Config;
use ecowell::output;
use ecowell::output::human;

pub fn run_daily(user_id: i64, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let data = insights::daily_insights(&db, user_id, today)?;

    if human_flag {
        println!("{}", human::format_daily_insights(&data));
    } else {
        let out = output::success("insights_daily", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_weekly(user_id: i64, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let data = insights::weekly_insights(&db, user_id, today)?;

    if human_flag {
        println!("{}", human::format_weekly_insights(&data));
    } else {
        let out = output::success("insights_weekly", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
