use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sex {
    Male,
    Female,
}

/// Weekly training volume, displayed with the labels users pick from.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(ascii_case_insensitive)]
pub enum ActivityLevel {
    #[strum(to_string = "No sport (sedentary)", serialize = "sedentary")]
    Sedentary,
    #[strum(to_string = "Light (1-2x/week)", serialize = "light")]
    Light,
    #[strum(to_string = "Moderate (3-4x/week)", serialize = "moderate")]
    Moderate,
    #[strum(to_string = "High (5-6x/week)", serialize = "high")]
    High,
    #[strum(
        to_string = "Very high (daily training)",
        serialize = "very-high",
        serialize = "very high"
    )]
    VeryHigh,
}

/// How aggressively the calorie goal exceeds maintenance.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Intensity {
    Slow,
    Normal,
    Fast,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub target_weight_kg: f64,
    pub activity: ActivityLevel,
    pub intensity: Intensity,
}
