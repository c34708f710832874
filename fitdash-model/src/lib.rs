pub mod calorie;
pub mod profile;
pub mod workout;
