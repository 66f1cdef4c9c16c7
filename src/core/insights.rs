//! Daily and weekly insight composition: pure aggregation and formatting
//! over activity, consumption and plan data.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::core::energy;
use crate::core::streaks::{self, STEP_GOAL};
use crate::db::Database;
use crate::models::{ActivityRecord, HealthProfile, MealConsumption, MealPlan, MealType, PlanStatus};

/// Fallback daily calorie target when no health profile (or an incomplete
/// one) makes the TDEE computation unavailable.
pub const DEFAULT_CALORIE_TARGET: i64 = 2000;

const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Serialize)]
pub struct DailyInsights {
    pub date: NaiveDate,
    pub activity: ActivityInsight,
    pub meals: MealsInsight,
    pub calories: CalorieInsight,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityInsight {
    pub steps: i64,
    pub steps_goal: i64,
    pub percentage: i64,
    pub calories_burned: f64,
    pub activity_type: Option<String>,
    pub duration_minutes: f64,
    pub goal_achieved: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MealsInsight {
    pub meals_consumed: i64,
    pub total_meals: i64,
    pub percentage: i64,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CalorieInsight {
    pub consumed: i64,
    pub target: i64,
    pub difference: i64,
    pub percentage: i64,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct WeeklyInsights {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub activity_summary: WeeklyActivity,
    pub meal_summary: WeeklyMeals,
    pub streak: u32,
    pub consistency_score: i64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyActivity {
    pub total_steps: i64,
    pub avg_steps: i64,
    pub total_calories: f64,
    pub days_active: i64,
    pub goal_days: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct WeeklyMeals {
    pub meals_logged: i64,
    pub total_possible: i64,
    pub percentage: i64,
    pub breakfast_count: i64,
    pub lunch_count: i64,
    pub dinner_count: i64,
    pub message: String,
}

/// Compose today's insights for a user. Missing data degrades to neutral
/// defaults throughout; nothing here hard-fails on an empty history.
pub fn daily_insights(db: &Database, user_id: i64, today: NaiveDate) -> Result<DailyInsights> {
    let health = db.get_health_profile(user_id)?;
    let activity = db.get_activity(user_id, today)?;
    let consumptions = db.consumptions_on(user_id, today)?;
    let plan = db.latest_plan_with_status(user_id, PlanStatus::Completed)?;

    let activity_block = analyze_activity(activity.as_ref());
    let meals_block = analyze_meals(&consumptions);
    let calories_block = analyze_calories(plan.as_ref(), &consumptions, health.as_ref(), today);

    let recommendations = recommend(&activity_block, &meals_block, &calories_block);

    Ok(DailyInsights {
        date: today,
        activity: activity_block,
        meals: meals_block,
        calories: calories_block,
        recommendations,
    })
}

/// Compose this week's insights (Monday through `today`).
pub fn weekly_insights(db: &Database, user_id: i64, today: NaiveDate) -> Result<WeeklyInsights> {
    let weekday = today.weekday().num_days_from_monday();
    let week_start = today - Duration::days(i64::from(weekday));

    let activities = db.activities_in_range(user_id, week_start, today)?;
    let consumptions = db.consumptions_in_range(user_id, week_start, today)?;

    Ok(WeeklyInsights {
        week_start,
        week_end: today,
        activity_summary: analyze_weekly_activity(&activities),
        meal_summary: analyze_weekly_meals(&consumptions),
        streak: streaks::qualifying_activity_streak(db, user_id, today)?,
        consistency_score: streaks::consistency_score(&activities, &consumptions),
    })
}

fn analyze_activity(activity: Option<&ActivityRecord>) -> ActivityInsight {
    let Some(a) = activity else {
        return ActivityInsight {
            steps: 0,
            steps_goal: STEP_GOAL,
            percentage: 0,
            calories_burned: 0.0,
            activity_type: None,
            duration_minutes: 0.0,
            goal_achieved: false,
            message: "No activity logged today. Start moving!".to_string(),
        };
    };

    let percentage = if a.steps > 0 {
        ((a.steps as f64 / STEP_GOAL as f64) * 100.0).min(100.0) as i64
    } else {
        0
    };
    let goal_achieved = a.steps >= STEP_GOAL;

    let message = if goal_achieved {
        format!("Amazing! You hit your {} step goal!", STEP_GOAL)
    } else if percentage >= 75 {
        format!("Almost there! Just {} more steps", STEP_GOAL - a.steps)
    } else if percentage >= 50 {
        format!("Good progress! {}% to your daily goal", percentage)
    } else {
        format!("Keep moving! {}% of your goal completed", percentage)
    };

    ActivityInsight {
        steps: a.steps,
        steps_goal: STEP_GOAL,
        percentage,
        calories_burned: a.calories_burned,
        activity_type: a.activity_type.clone(),
        duration_minutes: a.duration_minutes,
        goal_achieved,
        message,
    }
}

fn slot_consumed(consumptions: &[MealConsumption], meal_type: MealType) -> bool {
    consumptions
        .iter()
        .any(|m| m.meal_type == meal_type && m.consumed)
}

fn analyze_meals(consumptions: &[MealConsumption]) -> MealsInsight {
    let breakfast = slot_consumed(consumptions, MealType::Breakfast);
    let lunch = slot_consumed(consumptions, MealType::Lunch);
    let dinner = slot_consumed(consumptions, MealType::Dinner);

    let meals_consumed = [breakfast, lunch, dinner].iter().filter(|b| **b).count() as i64;
    let percentage = meals_consumed * 100 / 3;

    let message = match meals_consumed {
        3 => "Perfect! All meals logged today".to_string(),
        2 => "Good! 2 out of 3 meals logged".to_string(),
        1 => "Only 1 meal logged. Don't forget to track!".to_string(),
        _ => "No meals logged yet today".to_string(),
    };

    MealsInsight {
        meals_consumed,
        total_meals: 3,
        percentage,
        breakfast,
        lunch,
        dinner,
        message,
    }
}

fn analyze_calories(
    plan: Option<&MealPlan>,
    consumptions: &[MealConsumption],
    health: Option<&HealthProfile>,
    today: NaiveDate,
) -> CalorieInsight {
    let target = health
        .and_then(|h| {
            energy::calorie_target(
                h.weight_kg?,
                h.height_cm?,
                h.age?,
                h.gender.as_deref()?,
                h.activity_level.as_deref().unwrap_or(""),
                h.wellness_goal.as_deref(),
            )
        })
        .map(|t| t as i64)
        .unwrap_or(DEFAULT_CALORIE_TARGET);

    // Only meals that are both in today's entry of the stored plan and
    // marked consumed count towards intake.
    let mut consumed = 0i64;
    if let Some(p) = plan
        && let Some(day) = p.meals.iter().find(|d| d.date == today)
    {
        for c in consumptions {
            if c.consumed {
                consumed += day.meal(c.meal_type).calories;
            }
        }
    }

    let difference = consumed - target;
    let percentage = if target > 0 { consumed * 100 / target } else { 0 };

    let (status, message) = if difference.abs() <= 100 {
        (
            "perfect",
            "Right on target with your calories".to_string(),
        )
    } else if difference < -200 {
        (
            "low",
            format!("You're {} calories below target. Eat a bit more!", difference.abs()),
        )
    } else if difference > 200 {
        (
            "high",
            format!("You're {} calories over target. Consider lighter options", difference),
        )
    } else if difference < 0 {
        (
            "good_low",
            format!("Good! {} calories below target", difference.abs()),
        )
    } else {
        (
            "good_high",
            format!("Slightly over by {} calories - still good!", difference),
        )
    };

    CalorieInsight {
        consumed,
        target,
        difference,
        percentage,
        status: status.to_string(),
        message,
    }
}

/// Fixed decision table, ranked: step shortfall, calorie over/under by more
/// than 200, missed meal slots, activity variety. Capped at five entries
/// with an encouragement fallback when nothing fired.
fn recommend(
    activity: &ActivityInsight,
    meals: &MealsInsight,
    calories: &CalorieInsight,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !activity.goal_achieved {
        let remaining = STEP_GOAL - activity.steps;
        if remaining > 0 {
            recs.push(format!("Walk {} more steps to hit your daily goal", remaining));
        }
    }

    match calories.status.as_str() {
        "low" => recs.push(format!(
            "Add {} calories - try a healthy snack",
            calories.difference.abs()
        )),
        "high" => recs.push(format!(
            "{} calories over - consider lighter dinner",
            calories.difference
        )),
        _ => {}
    }

    if !meals.breakfast {
        recs.push("Don't skip breakfast! It boosts your metabolism".to_string());
    }
    if !meals.lunch {
        recs.push("Log your lunch to track your nutrition properly".to_string());
    }
    if !meals.dinner {
        recs.push("Remember to log your dinner meal".to_string());
    }

    if activity.activity_type.as_deref() == Some("walking") {
        recs.push("Try mixing up your activities - cycling or swimming!".to_string());
    }

    if recs.is_empty() {
        recs.push("You're doing great! Keep up the excellent work!".to_string());
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn analyze_weekly_activity(activities: &[ActivityRecord]) -> WeeklyActivity {
    if activities.is_empty() {
        return WeeklyActivity {
            total_steps: 0,
            avg_steps: 0,
            total_calories: 0.0,
            days_active: 0,
            goal_days: 0,
            message: "No activity data for this week".to_string(),
        };
    }

    let total_steps: i64 = activities.iter().map(|a| a.steps).sum();
    let total_calories: f64 = activities.iter().map(|a| a.calories_burned).sum();
    let days_active = activities.len() as i64;
    let goal_days = activities.iter().filter(|a| a.steps >= STEP_GOAL).count() as i64;
    let avg_steps = total_steps / days_active;

    let message = if goal_days >= 5 {
        format!("Excellent! Hit your step goal {}/7 days", goal_days)
    } else if goal_days >= 3 {
        format!("Good effort! {}/7 days at goal", goal_days)
    } else {
        format!("Keep pushing! Only {}/7 days at goal", goal_days)
    };

    WeeklyActivity {
        total_steps,
        avg_steps,
        total_calories,
        days_active,
        goal_days,
        message,
    }
}

fn analyze_weekly_meals(consumptions: &[MealConsumption]) -> WeeklyMeals {
    let total_possible = 21i64; // 7 days x 3 meals
    let meals_logged = consumptions.iter().filter(|m| m.consumed).count() as i64;
    let percentage = meals_logged * 100 / total_possible;

    let count = |t: MealType| {
        consumptions
            .iter()
            .filter(|m| m.meal_type == t && m.consumed)
            .count() as i64
    };

    let message = if percentage >= 90 {
        "Outstanding! Almost perfect meal tracking".to_string()
    } else if percentage >= 70 {
        "Great! Very consistent meal logging".to_string()
    } else if percentage >= 50 {
        "Good! Try to log more meals".to_string()
    } else {
        "Low meal tracking. More consistency needed!".to_string()
    };

    WeeklyMeals {
        meals_logged,
        total_possible,
        percentage,
        breakfast_count: count(MealType::Breakfast),
        lunch_count: count(MealType::Lunch),
        dinner_count: count(MealType::Dinner),
        message,
    }
}
