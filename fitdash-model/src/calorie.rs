#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meal {
    pub name: String,
    pub items: Vec<String>,
}

impl Meal {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            items: items.iter().map(|&item| item.to_owned()).collect(),
        }
    }
}

/// Daily energy targets in kcal and macronutrients in grams.
///
/// `carbs_g` is whatever energy is left after protein and fat, so it is
/// negative when those two alone exceed the calorie goal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaloriePlan {
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_goal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub meals: Vec<Meal>,
}
