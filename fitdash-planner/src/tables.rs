use fitdash_model::{
    profile::{ActivityLevel, Intensity},
    workout::Split,
};

pub const PROTEIN_G_PER_KG: f64 = 2.2;
pub const FAT_G_PER_KG: f64 = 0.8;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

pub const SAMPLE_MEALS: [(&str, &[&str]); 4] = [
    ("Breakfast", &["Oats with milk", "Banana", "Eggs"]),
    ("Lunch", &["Rice", "Chicken breast", "Vegetables"]),
    ("Snack", &["Greek yogurt", "Almonds"]),
    ("Dinner", &["Sweet potato", "Salmon", "Broccoli"]),
];

pub const SPLIT_ROTATION: [Split; 4] = [Split::Push, Split::Pull, Split::Legs, Split::FullBody];

pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;
pub const DEFAULT_NOTES: &str = "Controlled form";

pub const WARMUP: &str = "5–10 min light cardio";
pub const COOL_DOWN: &str = "Stretch after training";
pub const PRE_WORKOUT: &str = "Fast carbs + protein";
pub const POST_WORKOUT: &str = "Protein shake + meal";

pub fn activity_multiplier(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::High => 1.725,
        ActivityLevel::VeryHigh => 1.9,
    }
}

/// Fraction added on top of maintenance calories.
pub fn intensity_offset(intensity: Intensity) -> f64 {
    match intensity {
        Intensity::Slow => 0.1,
        Intensity::Normal => 0.15,
        Intensity::Fast => 0.2,
    }
}

pub fn split_exercises(split: Split) -> &'static [&'static str] {
    match split {
        Split::Push => &["Bench Press", "Overhead Press", "Dips", "Incline Dumbbell Press"],
        Split::Pull => &["Pull-ups", "Barbell Row", "Face Pull", "Biceps Curls"],
        Split::Legs => &["Squat", "Deadlift", "Leg Press", "Calf Raise"],
        Split::FullBody => &["Squat", "Bench Press", "Barbell Row", "Pull-up"],
    }
}
