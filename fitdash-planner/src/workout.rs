use fitdash_model::workout::{
    DayPlan, ExercisePrescription, Guidance, Level, NutritionTips, Split, WorkoutPlan,
    WorkoutPreferences,
};
use log::debug;

use crate::tables::{
    split_exercises, COOL_DOWN, DEFAULT_NOTES, DEFAULT_REPS, DEFAULT_SETS, POST_WORKOUT,
    PRE_WORKOUT, SPLIT_ROTATION, WARMUP,
};

/// Exercises prescribed for one day of the given split. Every level gets the
/// same list and volume.
pub fn exercises_for_split(split: Split, _level: Level) -> Vec<ExercisePrescription> {
    split_exercises(split)
        .iter()
        .map(|&exercise| ExercisePrescription {
            exercise: exercise.to_owned(),
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
            notes: DEFAULT_NOTES.to_owned(),
        })
        .collect()
}

/// Split for the zero-based day index; the rotation wraps after four days.
pub fn split_for_day(index: usize) -> Split {
    SPLIT_ROTATION[index % SPLIT_ROTATION.len()]
}

pub fn workout_plan(preferences: &WorkoutPreferences) -> WorkoutPlan {
    let days = (0..preferences.days_per_week)
        .map(|i| {
            let split = split_for_day(usize::from(i));
            DayPlan {
                day: i + 1,
                split,
                exercises: exercises_for_split(split, preferences.level),
            }
        })
        .collect::<Vec<_>>();
    debug!(
        "Generated {} training days for {:?}",
        days.len(),
        preferences
    );

    WorkoutPlan {
        preferences: preferences.clone(),
        days,
        guidance: Guidance {
            warmup: WARMUP.to_owned(),
            cool_down: COOL_DOWN.to_owned(),
        },
        nutrition: NutritionTips {
            pre_workout: PRE_WORKOUT.to_owned(),
            post_workout: POST_WORKOUT.to_owned(),
        },
    }
}
