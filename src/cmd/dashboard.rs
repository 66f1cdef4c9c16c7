use anyhow::Result;
use chrono::NaiveDate;

use ecowell::core::dashboard;
use ecowell::db::Database;
use ecowell::models::config::Config;
use ecowell::output;
use ecowell::output::human;

pub fn run(user_id: i64, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let data = dashboard::compute(&db, user_id, today)?;

    if human_flag {
        println!("{}", human::format_dashboard(&data));
    } else {
        let out = output::success("dashboard", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
