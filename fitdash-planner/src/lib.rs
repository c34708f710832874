pub mod calorie;
pub mod tables;
pub mod workout;

pub use calorie::calorie_plan;
pub use workout::workout_plan;
