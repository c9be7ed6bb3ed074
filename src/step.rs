//! Test step model.
//!
//! A [`Step`] is one atomic QA action: what to do ([`Action`]), what to do it
//! to ([`LocatorKind`] + locator), with which data, and what should happen.
//! [`CustomStepDraft`] is the partially filled form a user edits before a
//! step is committed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a field that does not apply to a step.
pub const NOT_APPLICABLE: &str = "-";

/// Kind of test action.
///
/// Registered actions have a script template (see [`crate::registry`]).
/// Anything else is kept verbatim in `Custom` and renders as a fallback line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Navigate,
    Type,
    Click,
    Wait,
    Assert,
    ApiRequest,
    Query,
    SpiderScan,
    ActiveScan,
    Review,
    Rescan,
    Custom(String),
}

impl Action {
    /// Every action with a registered template, in display order.
    pub const REGISTERED: &'static [Action] = &[
        Action::Navigate,
        Action::Type,
        Action::Click,
        Action::Wait,
        Action::Assert,
        Action::ApiRequest,
        Action::Query,
        Action::SpiderScan,
        Action::ActiveScan,
        Action::Review,
        Action::Rescan,
    ];

    /// Display label, also the form value the action is parsed from.
    pub fn label(&self) -> &str {
        match self {
            Action::Navigate => "Navigate",
            Action::Type => "Type",
            Action::Click => "Click",
            Action::Wait => "Wait",
            Action::Assert => "Assert",
            Action::ApiRequest => "API Request",
            Action::Query => "Query",
            Action::SpiderScan => "Spider Scan",
            Action::ActiveScan => "Active Scan",
            Action::Review => "Review",
            Action::Rescan => "Re-scan",
            Action::Custom(name) => name,
        }
    }

    pub fn is_registered(&self) -> bool {
        !matches!(self, Action::Custom(_))
    }
}

impl From<&str> for Action {
    /// Labels match exactly; anything else becomes `Custom`.
    fn from(s: &str) -> Self {
        Action::REGISTERED
            .iter()
            .find(|a| a.label() == s)
            .cloned()
            .unwrap_or_else(|| Action::Custom(s.to_string()))
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match Action::from(s.as_str()) {
            Action::Custom(_) => Action::Custom(s),
            known => known,
        }
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        match a {
            Action::Custom(name) => name,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a step's locator should be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocatorKind {
    Url,
    Css,
    XPath,
    Id,
    Name,
    LinkText,
    JsonPath,
    Endpoint,
    Sql,
    Custom(String),
}

impl LocatorKind {
    pub const KNOWN: &'static [LocatorKind] = &[
        LocatorKind::Url,
        LocatorKind::Css,
        LocatorKind::XPath,
        LocatorKind::Id,
        LocatorKind::Name,
        LocatorKind::LinkText,
        LocatorKind::JsonPath,
        LocatorKind::Endpoint,
        LocatorKind::Sql,
    ];

    pub fn label(&self) -> &str {
        match self {
            LocatorKind::Url => "URL",
            LocatorKind::Css => "CSS",
            LocatorKind::XPath => "XPath",
            LocatorKind::Id => "ID",
            LocatorKind::Name => "Name",
            LocatorKind::LinkText => "Link Text",
            LocatorKind::JsonPath => "JSONPath",
            LocatorKind::Endpoint => "Endpoint",
            LocatorKind::Sql => "SQL",
            LocatorKind::Custom(name) => name,
        }
    }
}

impl From<&str> for LocatorKind {
    fn from(s: &str) -> Self {
        LocatorKind::KNOWN
            .iter()
            .find(|k| k.label() == s)
            .cloned()
            .unwrap_or_else(|| LocatorKind::Custom(s.to_string()))
    }
}

impl From<String> for LocatorKind {
    fn from(s: String) -> Self {
        match LocatorKind::from(s.as_str()) {
            LocatorKind::Custom(_) => LocatorKind::Custom(s),
            known => known,
        }
    }
}

impl From<LocatorKind> for String {
    fn from(k: LocatorKind) -> Self {
        match k {
            LocatorKind::Custom(name) => name,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One test action.
///
/// `test_id` is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    test_id: String,
    pub description: String,
    pub action: Action,
    pub locator_kind: LocatorKind,
    pub locator: String,
    pub test_data: String,
    pub expected_result: String,
}

impl Step {
    pub fn new(
        test_id: impl Into<String>,
        description: impl Into<String>,
        action: Action,
        locator_kind: LocatorKind,
        locator: impl Into<String>,
        test_data: impl Into<String>,
        expected_result: impl Into<String>,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            description: description.into(),
            action,
            locator_kind,
            locator: locator.into(),
            test_data: test_data.into(),
            expected_result: expected_result.into(),
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }
}

/// Editable fields of a [`CustomStepDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepField {
    Description,
    Action,
    LocatorKind,
    Locator,
    TestData,
    ExpectedResult,
}

impl StepField {
    pub const ALL: [StepField; 6] = [
        StepField::Description,
        StepField::Action,
        StepField::LocatorKind,
        StepField::Locator,
        StepField::TestData,
        StepField::ExpectedResult,
    ];

    /// Fields that must be non-empty before a draft can be committed.
    pub const REQUIRED: [StepField; 3] =
        [StepField::Action, StepField::LocatorKind, StepField::Locator];

    pub fn label(&self) -> &'static str {
        match self {
            StepField::Description => "Description",
            StepField::Action => "Action",
            StepField::LocatorKind => "Locator Type",
            StepField::Locator => "Locator",
            StepField::TestData => "Test Data",
            StepField::ExpectedResult => "Expected Result",
        }
    }

    /// Machine name, as used in form element names and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            StepField::Description => "description",
            StepField::Action => "action",
            StepField::LocatorKind => "locatorKind",
            StepField::Locator => "locator",
            StepField::TestData => "testData",
            StepField::ExpectedResult => "expectedResult",
        }
    }

    pub fn is_required(&self) -> bool {
        StepField::REQUIRED.contains(self)
    }
}

/// A step being typed in. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomStepDraft {
    pub description: String,
    pub action: String,
    pub locator_kind: String,
    pub locator: String,
    pub test_data: String,
    pub expected_result: String,
}

impl CustomStepDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: StepField) -> &str {
        match field {
            StepField::Description => &self.description,
            StepField::Action => &self.action,
            StepField::LocatorKind => &self.locator_kind,
            StepField::Locator => &self.locator,
            StepField::TestData => &self.test_data,
            StepField::ExpectedResult => &self.expected_result,
        }
    }

    pub fn set(&mut self, field: StepField, value: String) {
        let slot = match field {
            StepField::Description => &mut self.description,
            StepField::Action => &mut self.action,
            StepField::LocatorKind => &mut self.locator_kind,
            StepField::Locator => &mut self.locator,
            StepField::TestData => &mut self.test_data,
            StepField::ExpectedResult => &mut self.expected_result,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        StepField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<StepField> {
        StepField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_round_trip() {
        for action in Action::REGISTERED {
            assert_eq!(&Action::from(action.label()), action);
        }
    }

    #[test]
    fn test_unknown_action_is_custom() {
        assert_eq!(Action::from("Hover"), Action::Custom("Hover".to_string()));
        // Labels are matched exactly.
        assert_eq!(Action::from("click"), Action::Custom("click".to_string()));
        assert!(!Action::from("").is_registered());
    }

    #[test]
    fn test_locator_kind_parse() {
        assert_eq!(LocatorKind::from("CSS"), LocatorKind::Css);
        assert_eq!(LocatorKind::from("Link Text"), LocatorKind::LinkText);
        assert_eq!(
            LocatorKind::from("Shadow DOM"),
            LocatorKind::Custom("Shadow DOM".to_string())
        );
    }

    #[test]
    fn test_step_serializes_camel_case_with_labels() {
        let step = Step::new(
            "TC-01",
            "Call users endpoint",
            Action::ApiRequest,
            LocatorKind::Endpoint,
            "/api/users",
            NOT_APPLICABLE,
            "200 OK",
        );
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["testId"], "TC-01");
        assert_eq!(json["action"], "API Request");
        assert_eq!(json["locatorKind"], "Endpoint");
        assert_eq!(json["testData"], "-");

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_draft_missing_required() {
        let mut draft = CustomStepDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.missing_required(), StepField::REQUIRED.to_vec());

        draft.set(StepField::Action, "Click".to_string());
        draft.set(StepField::Locator, ".btn".to_string());
        assert_eq!(draft.missing_required(), vec![StepField::LocatorKind]);
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_draft_set_and_get_every_field() {
        let mut draft = CustomStepDraft::new();
        for field in StepField::ALL {
            draft.set(field, field.key().to_string());
        }
        for field in StepField::ALL {
            assert_eq!(draft.get(field), field.key());
        }
    }
}
