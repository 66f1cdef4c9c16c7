//! BMR / TDEE / calorie-target formulas (Mifflin-St Jeor).
//!
//! These return `None` instead of erroring when inputs make the computation
//! impossible; callers treat an absent calorie target as "use the default".

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Basal Metabolic Rate in kcal/day.
///
/// `bmr(70.0, 175.0, 30, "male") == Some(1648.75)`
pub fn bmr(weight_kg: f64, height_cm: f64, age: i64, gender: &str) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 || age <= 0 {
        return None;
    }
    let gender = gender.to_lowercase();
    if !matches!(gender.as_str(), "male" | "female" | "other") {
        return None;
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let bmr = match gender.as_str() {
        "male" => base + 5.0,
        "female" => base - 161.0,
        // "other": average of the male and female formulas.
        _ => ((base + 5.0) + (base - 161.0)) / 2.0,
    };
    Some(round2(bmr))
}

/// Total Daily Energy Expenditure: BMR scaled by an activity factor.
/// Unrecognized levels fall back to sedentary rather than failing.
pub fn tdee(bmr: f64, activity_level: &str) -> Option<f64> {
    if bmr <= 0.0 {
        return None;
    }
    let multiplier = match activity_level.to_lowercase().as_str() {
        "sedentary" => 1.2,
        "active" => 1.375,
        "very-active" => 1.55,
        _ => 1.2,
    };
    Some(round2(bmr * multiplier))
}

/// Daily calorie target: TDEE adjusted for the wellness goal. Weight-loss
/// goals get a 500 kcal deficit floored at a safe minimum (1200 female,
/// 1500 otherwise); muscle-gain goals a 300 kcal surplus; everything else
/// maintains.
pub fn calorie_target(
    weight_kg: f64,
    height_cm: f64,
    age: i64,
    gender: &str,
    activity_level: &str,
    wellness_goal: Option<&str>,
) -> Option<f64> {
    let bmr = bmr(weight_kg, height_cm, age, gender)?;
    let tdee = tdee(bmr, activity_level)?;

    let goal = wellness_goal.map(|g| g.to_lowercase());
    let target = match goal.as_deref() {
        Some(g) if g.contains("lose") || g.contains("weight-loss") || g.contains("weight_loss") => {
            let min_calories = if gender.eq_ignore_ascii_case("female") {
                1200.0
            } else {
                1500.0
            };
            (tdee - 500.0).max(min_calories)
        }
        Some(g) if g.contains("gain") || g.contains("muscle") || g.contains("bulk") => tdee + 300.0,
        Some(g) if g.contains("maintain") || g.contains("balance") => tdee,
        _ => tdee,
    };

    Some(round2(target))
}

/// Body Mass Index from metric inputs.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round2(weight_kg / (height_m * height_m)))
}

/// WHO BMI classification.
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}
