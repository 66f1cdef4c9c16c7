use crate::core::consumption::DayStatus;
use crate::core::dashboard::DashboardData;
use crate::core::insights::{DailyInsights, WeeklyInsights};
use crate::core::plans::PlanSummary;
use crate::models::{DayMeals, MealPlan};

/// Pretty-print the dashboard readout.
pub fn format_dashboard(d: &DashboardData) -> String {
    let mut out = String::from("=== EcoWell Dashboard ===\n\n");
    out.push_str(&format!("Eco score:      {:.1}/100\n", d.eco_score));
    out.push_str(&format!("Wellness score: {:.1}/100\n", d.wellness_score));
    out.push_str(&format!("CO2 saved:      {:.2} kg/week\n", d.co2_saved_kg));
    out.push_str(&format!("Calories burned: {:.2}\n", d.calories_burned));
    out.push_str(&format!("Streak:         {} day(s)", d.streak_days));
    if let Some(ts) = d.last_updated {
        out.push_str(&format!(
            "\nLast updated:   {}",
            ts.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}

pub fn format_daily_insights(i: &DailyInsights) -> String {
    let mut out = format!("=== Daily Insights — {} ===\n\n", i.date);
    out.push_str(&format!(
        "Steps: {}/{} ({}%) — {}\n",
        i.activity.steps, i.activity.steps_goal, i.activity.percentage, i.activity.message
    ));
    out.push_str(&format!(
        "Meals: {}/{} — {}\n",
        i.meals.meals_consumed, i.meals.total_meals, i.meals.message
    ));
    out.push_str(&format!(
        "Calories: {}/{} ({}) — {}\n",
        i.calories.consumed, i.calories.target, i.calories.status, i.calories.message
    ));
    if !i.recommendations.is_empty() {
        out.push_str("\nRecommendations:");
        for r in &i.recommendations {
            out.push_str(&format!("\n  - {}", r));
        }
    }
    out
}

pub fn format_weekly_insights(i: &WeeklyInsights) -> String {
    let mut out = format!(
        "=== Weekly Insights — {} to {} ===\n\n",
        i.week_start, i.week_end
    );
    out.push_str(&format!(
        "Steps: {} total, {} avg/day, goal hit {} day(s)\n",
        i.activity_summary.total_steps, i.activity_summary.avg_steps, i.activity_summary.goal_days
    ));
    out.push_str(&format!("  {}\n", i.activity_summary.message));
    out.push_str(&format!(
        "Meals: {}/{} logged ({}%)\n",
        i.meal_summary.meals_logged, i.meal_summary.total_possible, i.meal_summary.percentage
    ));
    out.push_str(&format!("  {}\n", i.meal_summary.message));
    out.push_str(&format!(
        "Streak: {} day(s) | Consistency: {}/100",
        i.streak, i.consistency_score
    ));
    out
}

fn format_day(day: &DayMeals) -> String {
    format!(
        "Day {} ({}): B: {} | L: {} | D: {}  [{} kcal, {:.2} kg CO2]",
        day.day,
        day.date,
        day.breakfast.name,
        day.lunch.name,
        day.dinner.name,
        day.total_calories,
        day.total_carbon
    )
}

/// Pretty-print a plan with its per-day lines and weekly summary.
pub fn format_plan(plan: &MealPlan, summary: Option<&PlanSummary>) -> String {
    let mut out = format!("=== Meal Plan {} ===\n", plan.id);
    out.push_str(&format!("Status: {}", plan.status));
    if let Some(ref diet) = plan.dietary_preference {
        out.push_str(&format!(" | Diet: {}", diet));
    }
    if let Some(target) = plan.calorie_target {
        out.push_str(&format!(" | Target: {} kcal/day", target));
    }
    if plan.customized {
        out.push_str(" | customized");
    }
    if let Some(ref msg) = plan.error_message {
        out.push_str(&format!("\nError: {}", msg));
    }
    for day in &plan.meals {
        out.push('\n');
        out.push_str(&format_day(day));
    }
    if let Some(s) = summary {
        out.push_str(&format!(
            "\n\nWeek: {} kcal ({} avg/day), {:.2} kg CO2",
            s.total_calories_week, s.avg_calories_day, s.total_carbon_week
        ));
    }
    out
}

pub fn format_plan_line(plan: &MealPlan) -> String {
    let mut line = format!(
        "{} | {} | created {}",
        plan.id,
        plan.status,
        plan.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(ref diet) = plan.dietary_preference {
        line.push_str(&format!(" | {}", diet));
    }
    if plan.customized {
        line.push_str(" | customized");
    }
    line
}

pub fn format_day_status(s: &DayStatus) -> String {
    let mark = |b: bool| if b { "yes" } else { "no" };
    format!(
        "{}: breakfast {} | lunch {} | dinner {} ({}/{})",
        s.date,
        mark(s.breakfast),
        mark(s.lunch),
        mark(s.dinner),
        s.total_consumed,
        s.total_meals
    )
}
