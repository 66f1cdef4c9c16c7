use crate::models::LifestyleProfile;

fn transport_saving(mode: &str) -> f64 {
    match mode {
        "bike" | "walk" => 2000.0,
        "public_transport" => 1200.0,
        "electric_car" => 800.0,
        "carpool" => 600.0,
        "motorcycle" => 100.0,
        _ => 0.0,
    }
}

fn diet_saving(diet: &str) -> f64 {
    match diet {
        "vegan" => 1500.0,
        "vegetarian" => 1000.0,
        "pescatarian" => 600.0,
        "flexitarian" => 300.0,
        _ => 0.0,
    }
}

fn recycling_saving(habit: &str) -> f64 {
    match habit {
        "always" => 500.0,
        "often" => 350.0,
        "sometimes" => 150.0,
        "rarely" => 50.0,
        _ => 0.0,
    }
}

fn energy_saving(source: &str) -> f64 {
    match source {
        "renewable" => 2500.0,
        "mostly_renewable" => 1800.0,
        "mixed" => 800.0,
        "mostly_non_renewable" => 200.0,
        _ => 0.0,
    }
}

fn paper_saving(preference: &str) -> f64 {
    match preference {
        "digital" => 150.0,
        "mostly_digital" => 100.0,
        "both" => 50.0,
        "mostly_paper" => 10.0,
        _ => 0.0,
    }
}

/// Estimated CO2 saved in kg per year. All contributions are non-negative
/// and an absent profile yields 0.0, not the scoring baseline: the two
/// models are intentionally asymmetric.
pub fn carbon_saved(lifestyle: Option<&LifestyleProfile>) -> f64 {
    let Some(l) = lifestyle else {
        return 0.0;
    };

    let mut saved = 0.0;

    if let Some(ref mode) = l.transportation_mode {
        saved += transport_saving(&mode.to_lowercase());
    }
    if let Some(ref diet) = l.diet_type {
        saved += diet_saving(&diet.to_lowercase());
    }
    if let Some(ref habit) = l.recycling_habits {
        saved += recycling_saving(&habit.to_lowercase());
    }
    if let Some(ref source) = l.energy_source {
        saved += energy_saving(&source.to_lowercase());
    }
    if l.reusable_items {
        saved += 200.0;
    }
    if let Some(ref pref) = l.paper_preference {
        saved += paper_saving(&pref.to_lowercase());
    }

    (saved * 100.0).round() / 100.0
}
