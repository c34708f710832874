use std::path::Path;

use fitdash_model::{calorie::CaloriePlan, workout::WorkoutPlan};
use fitdash_pdf::Exporter;
use log::{debug, info};

use crate::{
    form::{CalorieForm, WorkoutForm},
    report::{self, CALORIE_TITLE, WORKOUT_TITLE},
    AppError, CALCULATE_FIRST, GENERATE_FIRST,
};

type Result<T> = std::result::Result<T, AppError>;

struct Shown<T> {
    plan: T,
    lines: Vec<String>,
}

/// Last computed plans together with the text they were shown as.
pub struct Dashboard {
    exporter: Box<dyn Exporter>,
    calorie: Option<Shown<CaloriePlan>>,
    workout: Option<Shown<WorkoutPlan>>,
}

impl Dashboard {
    pub fn new(exporter: Box<dyn Exporter>) -> Self {
        Self {
            exporter,
            calorie: None,
            workout: None,
        }
    }

    pub fn calculate(&mut self, form: &CalorieForm) -> Result<&[String]> {
        let profile = form.parse()?;
        info!("Calculating calorie plan");
        debug!("{:?}", profile);
        let plan = fitdash_planner::calorie_plan(&profile);
        let lines = report::calorie_lines(&plan);
        let shown = self.calorie.insert(Shown { plan, lines });
        Ok(&shown.lines)
    }

    pub fn generate(&mut self, form: &WorkoutForm) -> Result<&[String]> {
        let preferences = form.parse()?;
        info!(
            "Generating {}-day workout plan",
            preferences.days_per_week
        );
        let plan = fitdash_planner::workout_plan(&preferences);
        let lines = report::workout_lines(&plan);
        let shown = self.workout.insert(Shown { plan, lines });
        Ok(&shown.lines)
    }

    pub fn calorie_plan(&self) -> Option<&CaloriePlan> {
        self.calorie.as_ref().map(|shown| &shown.plan)
    }

    pub fn workout_plan(&self) -> Option<&WorkoutPlan> {
        self.workout.as_ref().map(|shown| &shown.plan)
    }

    pub fn calorie_lines(&self) -> Result<&[String]> {
        self.calorie
            .as_ref()
            .map(|shown| shown.lines.as_slice())
            .ok_or(AppError::MissingPlan(CALCULATE_FIRST))
    }

    pub fn workout_lines(&self) -> Result<&[String]> {
        self.workout
            .as_ref()
            .map(|shown| shown.lines.as_slice())
            .ok_or(AppError::MissingPlan(GENERATE_FIRST))
    }

    pub fn save_calorie_pdf(&self, path: &Path) -> Result<()> {
        let lines = self.calorie_lines()?;
        self.exporter.export(CALORIE_TITLE, lines, path)?;
        Ok(())
    }

    pub fn save_workout_pdf(&self, path: &Path) -> Result<()> {
        let lines = self.workout_lines()?;
        self.exporter.export(WORKOUT_TITLE, lines, path)?;
        Ok(())
    }

    pub fn calorie_json(&self) -> Result<String> {
        let plan = self
            .calorie_plan()
            .ok_or(AppError::MissingPlan(CALCULATE_FIRST))?;
        Ok(serde_json::to_string_pretty(plan)?)
    }

    pub fn workout_json(&self) -> Result<String> {
        let plan = self
            .workout_plan()
            .ok_or(AppError::MissingPlan(GENERATE_FIRST))?;
        Ok(serde_json::to_string_pretty(plan)?)
    }
}
