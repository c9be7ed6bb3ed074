//! Step authoring form.
//!
//! Holds the draft a user is editing and the custom sequence built from the
//! drafts they committed. The sequence is append-only: steps are never
//! reordered, edited or removed once committed.

use tracing::{debug, warn};

use crate::error::{Result, StepError};
use crate::registry;
use crate::step::{Action, CustomStepDraft, LocatorKind, Step, StepField};

/// Prefix of generated custom step ids.
pub const CUSTOM_ID_PREFIX: &str = "TC-CUSTOM-";

/// In-progress draft plus the committed custom sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthoringForm {
    draft: CustomStepDraft,
    steps: Vec<Step>,
    next_id: u64,
}

impl AuthoringForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CustomStepDraft {
        &self.draft
    }

    /// The committed custom sequence, in commit order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Set one draft field. No validation happens here.
    pub fn update_draft_field(&mut self, field: StepField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Locator kinds to offer for the draft's current action.
    pub fn locator_kind_options(&self) -> &'static [LocatorKind] {
        locator_kind_options_for(&self.draft.action)
    }

    /// Whether `action` offers the draft's current locator kind. An empty
    /// kind is offered by every action.
    pub fn offers_locator_kind(&self, action: &str) -> bool {
        let kind = self.draft.locator_kind.as_str();
        kind.is_empty() || locator_kind_options_for(action).iter().any(|k| k.label() == kind)
    }

    /// Why a commit would be rejected right now, if it would be.
    pub fn commit_hint(&self) -> Option<String> {
        let missing = self.draft.missing_required();
        if missing.is_empty() {
            return None;
        }
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        Some(format!("Fill in: {}", labels.join(", ")))
    }

    /// Commit the draft if it is valid.
    ///
    /// Returns `true` when a step was appended. An invalid draft is left
    /// untouched and nothing is appended.
    pub fn commit_step(&mut self) -> bool {
        self.try_commit_step().is_ok()
    }

    /// Like [`commit_step`](Self::commit_step), but reports which required
    /// fields were missing.
    pub fn try_commit_step(&mut self) -> Result<&Step> {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            debug!(?missing, "draft rejected");
            return Err(StepError::MissingFields(missing));
        }

        self.next_id += 1;
        let test_id = format!("{CUSTOM_ID_PREFIX}{:03}", self.next_id);
        let draft = std::mem::take(&mut self.draft);
        let description = if draft.description.is_empty() {
            draft.action.clone()
        } else {
            draft.description
        };

        let step = Step::new(
            test_id,
            description,
            Action::from(draft.action),
            LocatorKind::from(draft.locator_kind),
            draft.locator,
            draft.test_data,
            draft.expected_result,
        );
        debug!(test_id = step.test_id(), action = %step.action, "step committed");
        self.steps.push(step);
        Ok(&self.steps[self.steps.len() - 1])
    }
}

/// Locator kinds a form offers for `action`.
///
/// Falls back to every known kind when the action is empty or custom.
pub fn locator_kind_options_for(action: &str) -> &'static [LocatorKind] {
    let kinds = registry::locator_kinds(&Action::from(action));
    if kinds.is_empty() {
        LocatorKind::KNOWN
    } else {
        kinds
    }
}

/// Feed step specs through a fresh form, in order.
///
/// Malformed specs and rejected drafts are logged and skipped; the steps
/// that do commit keep their order and get consecutive ids. Each spec sets
/// every draft field, so a rejected draft never leaks into the next one.
pub fn build_from_specs<S: AsRef<str>>(specs: &[S]) -> Vec<Step> {
    let mut form = AuthoringForm::new();
    for spec in specs.iter().map(AsRef::as_ref) {
        let draft = match parse_step_spec(spec) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(spec, "skipping step: {e}");
                continue;
            }
        };
        for field in StepField::ALL {
            form.update_draft_field(field, draft.get(field));
        }
        if let Err(e) = form.try_commit_step() {
            warn!(spec, "skipping step: {e}");
        }
    }
    form.steps
}

/// Parse a compact step spec into a draft.
///
/// Format: `action|locatorKind|locator[|testData[|expectedResult[|description]]]`.
/// Fields are taken verbatim; emptiness of required fields is checked at
/// commit time, not here.
pub fn parse_step_spec(spec: &str) -> Result<CustomStepDraft> {
    let parts: Vec<&str> = spec.split('|').collect();
    if !(3..=6).contains(&parts.len()) {
        return Err(StepError::InvalidStepSpec(spec.to_string()));
    }

    let order = [
        StepField::Action,
        StepField::LocatorKind,
        StepField::Locator,
        StepField::TestData,
        StepField::ExpectedResult,
        StepField::Description,
    ];
    let mut draft = CustomStepDraft::new();
    for (field, value) in order.into_iter().zip(parts) {
        draft.set(field, value.to_string());
    }
    Ok(draft)
}
