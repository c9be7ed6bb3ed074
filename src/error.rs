//! Error types for qa-steps-rs.

use thiserror::Error;

use crate::step::StepField;
use crate::view::Tab;

/// Result type alias using [`StepError`].
pub type Result<T> = std::result::Result<T, StepError>;

/// Errors surfaced by the library and the CLI.
///
/// Note that an invalid draft passed to `AuthoringForm::commit_step` and an
/// unknown action passed to the script generator are *not* errors; see the
/// respective functions.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("missing required field(s): {}", field_list(.0))]
    MissingFields(Vec<StepField>),

    #[error("unknown tab: {0} (expected learn, practice or script)")]
    UnknownTab(String),

    #[error("the {0} tab is not available for this command")]
    TabUnavailable(Tab),

    #[error("no lesson matches '{0}'")]
    UnknownLesson(String),

    #[error("invalid step spec '{0}': expected action|locatorKind|locator[|testData[|expectedResult[|description]]]")]
    InvalidStepSpec(String),

    #[error("a lesson catalog needs at least one lesson")]
    EmptyCatalog,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn field_list(fields: &[StepField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
