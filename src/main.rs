mod cli;
mod cmd;

use clap::Parser;
use cli::{
    Cli, Commands, ConfigAction, HealthAction, InsightsAction, LifestyleAction, MealAction,
    PlanAction, StepsAction, UserAction,
};
use ecowell::core::error::CoreError;
use ecowell::models::config::Config;
use ecowell::output;
use std::process;

fn main() {
    let cli = Cli::parse();

    let user_id = cli.user.unwrap_or_else(|| {
        Config::load()
            .map(|c| c.default_user)
            .unwrap_or_else(|_| Config::default().default_user)
    });
    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let human = cli.human;

    let result = match cli.command {
        Commands::Init => cmd::init::run(human),
        Commands::Lifestyle { action } => match action {
            LifestyleAction::Set {
                transport,
                diet,
                shopping,
                recycling,
                reusable,
                energy,
                travel,
                paper,
            } => cmd::lifestyle::run_set(
                user_id,
                cmd::lifestyle::SetArgs {
                    transport,
                    diet,
                    shopping,
                    recycling,
                    reusable,
                    energy,
                    travel,
                    paper,
                },
                human,
            ),
            LifestyleAction::Show => cmd::lifestyle::run_show(user_id, human),
        },
        Commands::Health { action } => match action {
            HealthAction::Set {
                gender,
                age,
                height,
                weight,
                activity_level,
                goal,
                diet,
                allergies,
                conditions,
                meal_frequency,
                cooking_skill,
                time_available,
                budget,
                no_plan,
            } => cmd::health::run_set(
                user_id,
                cmd::health::SetArgs {
                    gender,
                    age,
                    height,
                    weight,
                    activity_level,
                    goal,
                    diet,
                    allergies,
                    conditions,
                    meal_frequency,
                    cooking_skill,
                    time_available,
                    budget,
                    no_plan,
                },
                human,
            ),
            HealthAction::Show => cmd::health::run_show(user_id, human),
        },
        Commands::Steps { action } => match action {
            StepsAction::Add {
                steps,
                activity_type,
                duration,
            } => cmd::steps::run_add(
                user_id,
                date,
                steps,
                activity_type.as_deref(),
                duration,
                human,
            ),
            StepsAction::Show => cmd::steps::run_show(user_id, date, human),
        },
        Commands::Meal { action } => match action {
            MealAction::Mark { meal_type, plan } => {
                cmd::meal::run_mark(user_id, date, &meal_type, plan.as_deref(), human)
            }
            MealAction::Unmark { meal_type } => {
                cmd::meal::run_unmark(user_id, date, &meal_type, human)
            }
            MealAction::Status => cmd::meal::run_status(user_id, date, human),
        },
        Commands::Plan { action } => match action {
            PlanAction::Generate {
                diet,
                calories,
                exclude,
                background,
                seed,
            } => cmd::plan::run_generate(
                user_id,
                diet.as_deref(),
                calories,
                exclude.as_deref(),
                background,
                seed,
                human,
            ),
            PlanAction::Show { plan_id } => {
                cmd::plan::run_show(user_id, plan_id.as_deref(), human)
            }
            PlanAction::List { last } => cmd::plan::run_list(user_id, last, human),
            PlanAction::Swap {
                plan_id,
                day,
                meal,
                with,
            } => cmd::plan::run_swap(user_id, &plan_id, day, &meal, with.as_deref(), human),
            PlanAction::Status { plan_id } => cmd::plan::run_status(user_id, &plan_id, human),
            PlanAction::Delete { plan_id } => cmd::plan::run_delete(user_id, &plan_id, human),
        },
        Commands::Dashboard => cmd::dashboard::run(user_id, date, human),
        Commands::Insights { action } => match action {
            InsightsAction::Daily => cmd::insights::run_daily(user_id, date, human),
            InsightsAction::Weekly => cmd::insights::run_weekly(user_id, date, human),
        },
        Commands::User { action } => match action {
            UserAction::Delete { yes } => cmd::user::run_delete(user_id, yes, human),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<CoreError>()
            .map(CoreError::code)
            .unwrap_or("general_error");
        let err = output::error("", code, &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap_or_default());
        process::exit(1);
    }
}
