//! Text shown in the output pane and exported line by line to PDF.

use fitdash_model::{calorie::CaloriePlan, workout::WorkoutPlan};
use itertools::Itertools;

pub const CALORIE_TITLE: &str = "Calorie Plan";
pub const WORKOUT_TITLE: &str = "Workout Plan";

pub fn calorie_lines(plan: &CaloriePlan) -> Vec<String> {
    let macros = [
        ("Protein", plan.protein_g),
        ("Fat", plan.fat_g),
        ("Carbs", plan.carbs_g),
    ]
    .iter()
    .map(|(name, grams)| format!("{}: {:.0} g", name, grams))
    .join(" | ");

    let mut lines = vec![
        format!("BMR: {:.0} kcal", plan.bmr),
        format!("TDEE: {:.0} kcal", plan.tdee),
        format!("Goal Calories: {:.0} kcal", plan.calorie_goal),
        macros,
        String::new(),
        "Example Day Plan:".to_owned(),
    ];
    for meal in &plan.meals {
        lines.push(format!("{}:", meal.name));
        lines.extend(meal.items.iter().map(|item| format!("  - {}", item)));
    }
    lines
}

pub fn workout_lines(plan: &WorkoutPlan) -> Vec<String> {
    let mut lines = vec!["Workout Plan (Week):".to_owned()];
    for day in &plan.days {
        lines.push(format!("Day {} - {}", day.day, day.split));
        lines.extend(day.exercises.iter().map(|e| {
            format!(
                "  - {}: {} sets × {} reps ({})",
                e.exercise, e.sets, e.reps, e.notes
            )
        }));
        lines.push(String::new());
    }

    lines.extend([
        String::new(),
        "General Guidance:".to_owned(),
        format!("- Warmup: {}", plan.guidance.warmup),
        format!("- Cool-down: {}", plan.guidance.cool_down),
        String::new(),
        "Nutrition:".to_owned(),
        format!("- Pre: {}", plan.nutrition.pre_workout),
        format!("- Post: {}", plan.nutrition.post_workout),
    ]);
    lines
}
