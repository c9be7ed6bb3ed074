//! Action registry.
//!
//! The single authority on which actions exist, which locator kinds make
//! sense for each one, and how a step renders as automation script text.
//!
//! Templates substitute step fields verbatim:
//!
//! | action      | template                                   |
//! |-------------|--------------------------------------------|
//! | Navigate    | `browser.goto(<locator>)`                  |
//! | Type        | `setValue(<locator>, <testData>)`          |
//! | Click       | `click(<locator>)`                         |
//! | Wait        | `pause(<testData>)`                        |
//! | Assert      | `expectText(<locator>, <expectedResult>)`  |
//! | API Request | `request(<locator>, method=GET)`           |
//! | Query       | `db.query(<locator>)`                      |
//! | Spider Scan | `spider.scan(<locator>)`                   |
//! | Active Scan | `ascan.scan(<locator>)`                    |
//! | Review      | `core.alerts(<locator>)`                   |
//! | Re-scan     | `ascan.scan(<locator>, recurse=true)`      |
//!
//! Any other action renders as `// Action: <action>, Locator: <locator>`.

use crate::step::{Action, LocatorKind, Step};

const ELEMENT_KINDS: &[LocatorKind] = &[
    LocatorKind::Css,
    LocatorKind::XPath,
    LocatorKind::Id,
    LocatorKind::Name,
];

const CLICKABLE_KINDS: &[LocatorKind] = &[
    LocatorKind::Css,
    LocatorKind::XPath,
    LocatorKind::Id,
    LocatorKind::Name,
    LocatorKind::LinkText,
];

const ASSERT_KINDS: &[LocatorKind] = &[
    LocatorKind::Css,
    LocatorKind::XPath,
    LocatorKind::Id,
    LocatorKind::JsonPath,
];

const URL_KINDS: &[LocatorKind] = &[LocatorKind::Url];
const ENDPOINT_KINDS: &[LocatorKind] = &[LocatorKind::Endpoint];
const SQL_KINDS: &[LocatorKind] = &[LocatorKind::Sql];

/// Locator kinds that are meaningful for `action`.
///
/// Empty for custom actions: the registry has no opinion about them.
pub fn locator_kinds(action: &Action) -> &'static [LocatorKind] {
    match action {
        Action::Navigate => URL_KINDS,
        Action::Type => ELEMENT_KINDS,
        Action::Click => CLICKABLE_KINDS,
        Action::Wait => ELEMENT_KINDS,
        Action::Assert => ASSERT_KINDS,
        Action::ApiRequest => ENDPOINT_KINDS,
        Action::Query => SQL_KINDS,
        Action::SpiderScan | Action::ActiveScan | Action::Review | Action::Rescan => URL_KINDS,
        Action::Custom(_) => &[],
    }
}

/// Whether `kind` is valid for `action`. Custom actions accept any kind.
pub fn accepts_locator_kind(action: &Action, kind: &LocatorKind) -> bool {
    let kinds = locator_kinds(action);
    kinds.is_empty() || kinds.contains(kind)
}

/// Render the script line for a step, without its description comment.
///
/// Total: unknown actions produce the fallback line instead of failing.
pub fn render_action(step: &Step) -> String {
    let locator = &step.locator;
    match &step.action {
        Action::Navigate => format!("browser.goto({locator})"),
        Action::Type => format!("setValue({locator}, {})", step.test_data),
        Action::Click => format!("click({locator})"),
        Action::Wait => format!("pause({})", step.test_data),
        Action::Assert => format!("expectText({locator}, {})", step.expected_result),
        Action::ApiRequest => format!("request({locator}, method=GET)"),
        Action::Query => format!("db.query({locator})"),
        Action::SpiderScan => format!("spider.scan({locator})"),
        Action::ActiveScan => format!("ascan.scan({locator})"),
        Action::Review => format!("core.alerts({locator})"),
        Action::Rescan => format!("ascan.scan({locator}, recurse=true)"),
        Action::Custom(name) => fallback_line(name, locator),
    }
}

/// The line emitted for actions without a template.
pub fn fallback_line(action: &str, locator: &str) -> String {
    format!("// Action: {action}, Locator: {locator}")
}

/// Render a full script entry: description comment, then the action line.
pub fn render_step(step: &Step) -> String {
    format!("// {}\n{}", step.description, render_action(step))
}
