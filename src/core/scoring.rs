use crate::models::{HealthProfile, LifestyleProfile};

/// Score returned when no profile exists yet.
pub const NEUTRAL_SCORE: f64 = 50.0;

fn transport_delta(mode: &str) -> f64 {
    match mode {
        "bike" | "walk" => 15.0,
        "public_transport" => 12.0,
        "electric_car" => 8.0,
        "carpool" => 5.0,
        "motorcycle" => -5.0,
        "car" => -10.0,
        _ => 0.0,
    }
}

fn diet_delta(diet: &str) -> f64 {
    match diet {
        "vegan" => 15.0,
        "vegetarian" => 10.0,
        "pescatarian" => 5.0,
        "flexitarian" => 3.0,
        "omnivore" => -5.0,
        _ => 0.0,
    }
}

fn recycling_delta(habit: &str) -> f64 {
    match habit {
        "always" => 10.0,
        "often" => 7.0,
        "sometimes" => 3.0,
        "rarely" => -3.0,
        "never" => -8.0,
        _ => 0.0,
    }
}

fn energy_delta(source: &str) -> f64 {
    match source {
        "renewable" => 10.0,
        "mostly_renewable" => 7.0,
        "mixed" => 3.0,
        "mostly_non_renewable" => -3.0,
        "non_renewable" => -8.0,
        _ => 0.0,
    }
}

fn travel_delta(frequency: &str) -> f64 {
    match frequency {
        "rarely" => 8.0,
        "occasionally" => 3.0,
        "monthly" => -2.0,
        "weekly" => -8.0,
        "daily" => -12.0,
        _ => 0.0,
    }
}

fn paper_delta(preference: &str) -> f64 {
    match preference {
        "digital" => 5.0,
        "mostly_digital" => 3.0,
        "both" => 0.0,
        "mostly_paper" => -3.0,
        "paper" => -5.0,
        _ => 0.0,
    }
}

/// Eco score in [0,100]: neutral 50 baseline plus per-field deltas.
/// Missing profile or fields fall back to the baseline; unknown values add
/// nothing. Pure and deterministic.
pub fn eco_score(lifestyle: Option<&LifestyleProfile>) -> f64 {
    let Some(l) = lifestyle else {
        return NEUTRAL_SCORE;
    };

    let mut score = NEUTRAL_SCORE;

    if let Some(ref mode) = l.transportation_mode {
        score += transport_delta(&mode.to_lowercase());
    }
    if let Some(ref diet) = l.diet_type {
        score += diet_delta(&diet.to_lowercase());
    }
    if let Some(ref habit) = l.recycling_habits {
        score += recycling_delta(&habit.to_lowercase());
    }
    if l.reusable_items {
        score += 8.0;
    }
    if let Some(ref source) = l.energy_source {
        score += energy_delta(&source.to_lowercase());
    }
    if let Some(ref freq) = l.travel_frequency {
        score += travel_delta(&freq.to_lowercase());
    }
    if let Some(ref pref) = l.paper_preference {
        score += paper_delta(&pref.to_lowercase());
    }

    score.clamp(0.0, 100.0)
}

fn activity_delta(level: &str) -> f64 {
    match level {
        "very_active" => 20.0,
        "active" => 15.0,
        "moderately_active" => 10.0,
        "lightly_active" => 5.0,
        "sedentary" => -10.0,
        _ => 0.0,
    }
}

fn goal_delta(goal: &str) -> f64 {
    match goal {
        "weight_loss" => 5.0,
        "muscle_gain" => 5.0,
        "maintain_health" => 8.0,
        "improve_fitness" => 7.0,
        "stress_reduction" => 5.0,
        "better_sleep" => 5.0,
        // Any stated goal still counts for something.
        _ => 3.0,
    }
}

/// BMI banding. The bands mirror the stored rule table, gaps included:
/// values between bands (e.g. 24.95) fall through to the penalty branch.
fn bmi_delta(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    if (18.5..=24.9).contains(&bmi) {
        15.0
    } else if (25.0..=29.9).contains(&bmi) {
        5.0
    } else if (17.0..18.5).contains(&bmi) {
        5.0
    } else {
        -5.0
    }
}

/// Wellness score in [0,100]: neutral 50 baseline plus activity level,
/// BMI band, age band, wellness goal and dietary mindfulness contributions.
pub fn wellness_score(health: Option<&HealthProfile>) -> f64 {
    let Some(h) = health else {
        return NEUTRAL_SCORE;
    };

    let mut score = NEUTRAL_SCORE;

    if let Some(ref level) = h.activity_level {
        score += activity_delta(&level.to_lowercase());
    }

    if let (Some(height), Some(weight)) = (h.height_cm, h.weight_kg)
        && height > 0.0
    {
        score += bmi_delta(height, weight);
    }

    if let Some(age) = h.age {
        if (18..=65).contains(&age) {
            score += 5.0;
        } else if age > 65 {
            score += 10.0;
        }
    }

    if let Some(ref goal) = h.wellness_goal {
        score += goal_delta(&goal.to_lowercase());
    }

    if let Some(ref pref) = h.dietary_preference
        && pref.to_lowercase() != "none"
    {
        score += 3.0;
    }

    score.clamp(0.0, 100.0)
}
