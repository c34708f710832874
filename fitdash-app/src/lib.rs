pub mod config;
pub mod console;
pub mod dashboard;
pub mod form;
pub mod logging;
pub mod report;

use fitdash_pdf::ExportError;

use crate::form::FormError;

pub const CALCULATE_FIRST: &str = "Calculate a plan first.";
pub const GENERATE_FIRST: &str = "Generate a plan first.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{0}")]
    MissingPlan(&'static str),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),
}
