use std::str::FromStr;

use fitdash_model::{
    profile::{ActivityLevel, Intensity, Sex, UserProfile},
    workout::{Equipment, Level, WorkoutPreferences},
};
use strum::IntoEnumIterator;

pub const MIN_DAYS_PER_WEEK: u8 = 1;
pub const MAX_DAYS_PER_WEEK: u8 = 6;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
    #[error("\"{value}\" is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },
}

type Result<T> = std::result::Result<T, FormError>;

/// One editable form field as presented to the user.
pub struct Field<'a> {
    pub label: &'static str,
    pub choices: Vec<String>,
    pub value: &'a mut String,
}

impl<'a> Field<'a> {
    fn text(label: &'static str, value: &'a mut String) -> Self {
        Self {
            label,
            choices: Vec::new(),
            value,
        }
    }

    fn choice<T: IntoEnumIterator + ToString>(label: &'static str, value: &'a mut String) -> Self {
        Self {
            label,
            choices: T::iter().map(|choice| choice.to_string()).collect(),
            value,
        }
    }
}

/// Raw calorie settings as typed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct CalorieForm {
    pub sex: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub target: String,
    pub activity: String,
    pub intensity: String,
}

impl Default for CalorieForm {
    fn default() -> Self {
        Self {
            sex: Sex::Male.to_string(),
            age: "25".to_owned(),
            weight: "80".to_owned(),
            height: "180".to_owned(),
            target: "90".to_owned(),
            activity: ActivityLevel::Moderate.to_string(),
            intensity: Intensity::Normal.to_string(),
        }
    }
}

impl CalorieForm {
    pub fn parse(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            sex: parse_choice("gender", &self.sex)?,
            age: parse_number("age", &self.age)?,
            weight_kg: parse_measure("weight", &self.weight)?,
            height_cm: parse_measure("height", &self.height)?,
            target_weight_kg: parse_measure("target weight", &self.target)?,
            activity: parse_choice("activity level", &self.activity)?,
            intensity: parse_choice("intensity", &self.intensity)?,
        })
    }

    pub fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::choice::<Sex>("Gender", &mut self.sex),
            Field::text("Age", &mut self.age),
            Field::text("Weight (kg)", &mut self.weight),
            Field::text("Height (cm)", &mut self.height),
            Field::text("Target (kg)", &mut self.target),
            Field::choice::<ActivityLevel>("Activity", &mut self.activity),
            Field::choice::<Intensity>("Intensity", &mut self.intensity),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutForm {
    pub level: String,
    pub days_per_week: String,
    pub equipment: String,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            level: Level::Beginner.to_string(),
            days_per_week: "4".to_owned(),
            equipment: Equipment::Gym.to_string(),
        }
    }
}

impl WorkoutForm {
    pub fn parse(&self) -> Result<WorkoutPreferences> {
        Ok(WorkoutPreferences {
            level: parse_choice("level", &self.level)?,
            days_per_week: parse_days(&self.days_per_week)?,
            equipment: parse_choice("equipment", &self.equipment)?,
        })
    }

    pub fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::choice::<Level>("Level", &mut self.level),
            Field::text("Days per Week (1-6)", &mut self.days_per_week),
            Field::choice::<Equipment>("Equipment", &mut self.equipment),
        ]
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_owned(),
    })
}

fn parse_measure(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = parse_number(field, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
    }
}

fn parse_choice<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| FormError::InvalidChoice {
        field,
        value: raw.to_owned(),
    })
}

fn parse_days(raw: &str) -> Result<u8> {
    let field = "days per week";
    let days: i64 = parse_number(field, raw)?;
    u8::try_from(days)
        .ok()
        .filter(|d| (MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(d))
        .ok_or(FormError::OutOfRange {
            field,
            value: days,
            min: MIN_DAYS_PER_WEEK,
            max: MAX_DAYS_PER_WEEK,
        })
}
