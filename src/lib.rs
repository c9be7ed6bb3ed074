//! # qa-steps-rs
//!
//! Test-step authoring and automation script generation for a QA
//! "automation showcase".
//!
//! ## Overview
//!
//! - **Steps**: one atomic test action (action, locator, data, oracle)
//! - **Action registry**: per-action script template and valid locator kinds
//! - **Lesson catalog**: curated, read-only step sequences
//! - **Authoring form**: draft editing and an append-only custom sequence
//! - **Script generator**: steps in, illustrative script text out
//! - **View controller**: lesson x tab state and the view derived from it
//!
//! ## Example
//!
//! ```
//! use qa_steps_rs::{AuthoringForm, StepField, generate_script};
//!
//! let mut form = AuthoringForm::new();
//! form.update_draft_field(StepField::Action, "Click");
//! form.update_draft_field(StepField::LocatorKind, "CSS");
//! form.update_draft_field(StepField::Locator, ".btn");
//! assert!(form.commit_step());
//!
//! assert_eq!(generate_script(form.steps()), "// Click\nclick(.btn)");
//! ```

pub mod authoring;
pub mod catalog;
pub mod error;
pub mod output;
pub mod registry;
pub mod script;
pub mod session;
pub mod step;
pub mod table;
pub mod view;

pub use authoring::{
    AuthoringForm, CUSTOM_ID_PREFIX, build_from_specs, locator_kind_options_for, parse_step_spec,
};
pub use catalog::{Lesson, LessonCatalog, LessonIndex};
pub use error::{Result, StepError};
pub use output::{Rendering, write_text};
pub use registry::{accepts_locator_kind, locator_kinds, render_action, render_step};
pub use script::generate_script;
pub use session::{Event, Session};
pub use step::{Action, CustomStepDraft, LocatorKind, NOT_APPLICABLE, Step, StepField};
pub use table::{COLUMNS, StepTable};
pub use view::{Tab, View, ViewState, resolve_view};
