use anyhow::Result;
use serde_json::json;

use ecowell::db::Database;
use ecowell::models::config::Config;
use ecowell::output;

pub fn run(human: bool) -> Result<()> {
    let config = Config::load()?;
    config.save()?;
    Database::open(&Config::db_path())?;

    if human {
        println!("Initialized. Data stored in {:?}", Config::data_dir());
    } else {
        let out = output::success(
            "init",
            json!({
                "data_dir": Config::data_dir(),
                "config_path": Config::path(),
                "default_user": config.default_user,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
