use anyhow::Result;
use serde_json::json;

use ecowell::core::error::CoreError;
use ecowell::db::Database;
use ecowell::models::config::Config;
use ecowell::output;

pub fn run_delete(user_id: i64, yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        return Err(CoreError::Validation(
            "deleting all user data is irreversible; pass --yes to confirm".to_string(),
        )
        .into());
    }

    let db = Database::open(&Config::db_path())?;
    db.delete_user_data(user_id)?;

    if human_flag {
        println!("Deleted all data for user {}.", user_id);
    } else {
        let out = output::success("user_delete", json!({ "user_id": user_id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
