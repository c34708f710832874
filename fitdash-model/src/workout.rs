use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Level {
    Beginner,
    Advanced,
    Pro,
}

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Equipment {
    Gym,
    Home,
}

/// Muscle-group focus of a single training day.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Split {
    Push,
    Pull,
    Legs,
    #[strum(to_string = "Full Body", serialize = "full-body")]
    #[cfg_attr(feature = "serde", serde(rename = "Full Body"))]
    FullBody,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutPreferences {
    pub level: Level,
    pub days_per_week: u8,
    pub equipment: Equipment,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExercisePrescription {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// 1-based position within the week.
    pub day: u8,
    pub split: Split,
    pub exercises: Vec<ExercisePrescription>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guidance {
    pub warmup: String,
    pub cool_down: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutritionTips {
    pub pre_workout: String,
    pub post_workout: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutPlan {
    pub preferences: WorkoutPreferences,
    pub days: Vec<DayPlan>,
    pub guidance: Guidance,
    pub nutrition: NutritionTips,
}
