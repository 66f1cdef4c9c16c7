use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecowell", version, about = "Eco-wellness lifestyle tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// User id (default: config default_user)
    #[arg(long, global = true)]
    pub user: Option<i64>,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and config
    Init,

    /// Manage the eco-lifestyle profile
    Lifestyle {
        #[command(subcommand)]
        action: LifestyleAction,
    },

    /// Manage the health profile
    Health {
        #[command(subcommand)]
        action: HealthAction,
    },

    /// Log daily steps and activity
    Steps {
        #[command(subcommand)]
        action: StepsAction,
    },

    /// Track meal consumption
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Generate and manage 7-day meal plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Combined scores, carbon savings and streak overview
    Dashboard,

    /// Daily and weekly insights
    Insights {
        #[command(subcommand)]
        action: InsightsAction,
    },

    /// User data management
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum LifestyleAction {
    /// Set lifestyle answers (only given fields are changed)
    Set {
        /// e.g. bike, walk, public-transport, electric-vehicle, carpool, car
        #[arg(long)]
        transport: Option<String>,
        /// e.g. vegan, vegetarian, pescatarian, flexitarian, omnivore
        #[arg(long)]
        diet: Option<String>,
        /// e.g. second-hand, eco-brands, minimal, regular
        #[arg(long)]
        shopping: Option<String>,
        /// e.g. always, mostly, sometimes, never
        #[arg(long)]
        recycling: Option<String>,
        /// Uses reusable bags/bottles/containers
        #[arg(long)]
        reusable: Option<bool>,
        /// e.g. renewable, mixed, standard
        #[arg(long)]
        energy: Option<String>,
        /// e.g. never, rarely, occasionally, frequently
        #[arg(long)]
        travel: Option<String>,
        /// e.g. digital, mixed, paper
        #[arg(long)]
        paper: Option<String>,
    },
    /// Show the stored profile with derived eco score and carbon savings
    Show,
}

#[derive(Subcommand)]
pub enum HealthAction {
    /// Set health answers (only given fields are changed)
    Set {
        /// male, female or other
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        age: Option<i64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        weight: Option<f64>,
        /// e.g. sedentary, active, very-active
        #[arg(long)]
        activity_level: Option<String>,
        /// e.g. weight-loss, muscle-gain, maintain
        #[arg(long)]
        goal: Option<String>,
        /// Dietary preference for meal planning
        #[arg(long)]
        diet: Option<String>,
        /// Comma-separated allergies
        #[arg(long)]
        allergies: Option<String>,
        /// Comma-separated medical conditions
        #[arg(long)]
        conditions: Option<String>,
        #[arg(long)]
        meal_frequency: Option<String>,
        #[arg(long)]
        cooking_skill: Option<String>,
        #[arg(long)]
        time_available: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        /// Skip the automatic meal-plan generation after saving
        #[arg(long)]
        no_plan: bool,
    },
    /// Show the stored profile with derived wellness metrics
    Show,
}

#[derive(Subcommand)]
pub enum StepsAction {
    /// Record steps (and optionally a timed activity) for a day
    Add {
        steps: i64,
        /// e.g. walking, running, cycling, gym, swimming
        #[arg(long = "type")]
        activity_type: Option<String>,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<f64>,
    },
    /// Show the activity record for a day
    Show,
}

#[derive(Subcommand)]
pub enum MealAction {
    /// Mark a meal slot as consumed
    Mark {
        /// breakfast, lunch or dinner
        meal_type: String,
        /// Meal plan this consumption belongs to
        #[arg(long)]
        plan: Option<String>,
    },
    /// Clear the consumed flag for a meal slot
    Unmark {
        /// breakfast, lunch or dinner
        meal_type: String,
    },
    /// Per-slot consumption status for a day
    Status,
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a new 7-day plan
    Generate {
        /// Dietary preference (default: lifestyle profile, then balanced)
        #[arg(long)]
        diet: Option<String>,
        /// Daily calorie target stored on the plan
        #[arg(long)]
        calories: Option<i64>,
        /// Comma-separated ingredients to avoid (best effort)
        #[arg(long)]
        exclude: Option<String>,
        /// Run generation on a background worker
        #[arg(long)]
        background: bool,
        /// RNG seed for reproducible plans
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a plan (default: the latest completed one)
    Show {
        plan_id: Option<String>,
    },
    /// List recent plans
    List {
        /// Number of plans to show
        #[arg(long, default_value_t = 10)]
        last: i64,
    },
    /// Swap one meal slot for an alternative from the catalog
    Swap {
        plan_id: String,
        /// Day of the plan, 1-7
        #[arg(long)]
        day: u8,
        /// breakfast, lunch or dinner
        #[arg(long)]
        meal: String,
        /// Name of the replacement meal (default: first alternative)
        #[arg(long)]
        with: Option<String>,
    },
    /// Show just the lifecycle status of a plan
    Status {
        plan_id: String,
    },
    /// Delete a plan
    Delete {
        plan_id: String,
    },
}

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Today's activity, meal and calorie insights
    Daily,
    /// This week's aggregates, streak and consistency score
    Weekly,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Delete all stored data for the user
    Delete {
        /// Confirm deletion without prompting
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. default_user)
        key: String,
        /// Config value
        value: String,
    },
}
