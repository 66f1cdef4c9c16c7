use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use ecowell::core::{carbon, scoring};
use ecowell::db::Database;
use ecowell::models::LifestyleProfile;
use ecowell::models::config::Config;
use ecowell::output;

pub struct SetArgs {
    pub transport: Option<String>,
    pub diet: Option<String>,
    pub shopping: Option<String>,
    pub recycling: Option<String>,
    pub reusable: Option<bool>,
    pub energy: Option<String>,
    pub travel: Option<String>,
    pub paper: Option<String>,
}

pub fn run_set(user_id: i64, args: SetArgs, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let mut profile = db
        .get_lifestyle_profile(user_id)?
        .unwrap_or_else(|| LifestyleProfile::new(user_id));

    if args.transport.is_some() {
        profile.transportation_mode = args.transport;
    }
    if args.diet.is_some() {
        profile.diet_type = args.diet;
    }
    if args.shopping.is_some() {
        profile.shopping_pattern = args.shopping;
    }
    if args.recycling.is_some() {
        profile.recycling_habits = args.recycling;
    }
    if let Some(reusable) = args.reusable {
        profile.reusable_items = reusable;
    }
    if args.energy.is_some() {
        profile.energy_source = args.energy;
    }
    if args.travel.is_some() {
        profile.travel_frequency = args.travel;
    }
    if args.paper.is_some() {
        profile.paper_preference = args.paper;
    }
    profile.updated_at = Utc::now();

    db.upsert_lifestyle_profile(&profile)?;

    let eco_score = scoring::eco_score(Some(&profile));
    let co2_saved = carbon::carbon_saved(Some(&profile));

    if human {
        println!(
            "Lifestyle profile saved. Eco score: {:.1}/100, CO2 saved: {:.2} kg/week",
            eco_score, co2_saved
        );
    } else {
        let out = output::success(
            "lifestyle_set",
            json!({
                "profile": profile,
                "eco_score": eco_score,
                "co2_saved_kg": co2_saved,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(user_id: i64, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let profile = db.get_lifestyle_profile(user_id)?;

    let eco_score = scoring::eco_score(profile.as_ref());
    let co2_saved = carbon::carbon_saved(profile.as_ref());

    if human {
        match profile {
            Some(ref p) => {
                println!("=== Lifestyle Profile (user {}) ===", user_id);
                let field = |label: &str, value: &Option<String>| {
                    println!("{:<16} {}", label, value.as_deref().unwrap_or("-"));
                };
                field("Transport:", &p.transportation_mode);
                field("Diet:", &p.diet_type);
                field("Shopping:", &p.shopping_pattern);
                field("Recycling:", &p.recycling_habits);
                println!("{:<16} {}", "Reusable items:", p.reusable_items);
                field("Energy:", &p.energy_source);
                field("Travel:", &p.travel_frequency);
                field("Paper:", &p.paper_preference);
                println!("Eco score: {:.1}/100 | CO2 saved: {:.2} kg/week", eco_score, co2_saved);
            }
            None => println!("No lifestyle profile for user {}.", user_id),
        }
    } else {
        let out = output::success(
            "lifestyle_show",
            json!({
                "profile": profile,
                "eco_score": eco_score,
                "co2_saved_kg": co2_saved,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
