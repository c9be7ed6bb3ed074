//! Script generator.
//!
//! Turns a step sequence into illustrative automation script text. Each
//! step becomes a description comment plus its templated action line (see
//! [`crate::registry`]); entries are separated by a single blank line.
//!
//! ```
//! use qa_steps_rs::{Action, LocatorKind, Step, generate_script};
//!
//! let steps = vec![
//!     Step::new("T-1", "Open login", Action::Navigate, LocatorKind::Url,
//!               "https://example.com/login", "-", "Login page shown"),
//!     Step::new("T-2", "Submit", Action::Click, LocatorKind::Css,
//!               "#submit", "-", "Dashboard shown"),
//! ];
//!
//! assert_eq!(
//!     generate_script(&steps),
//!     "// Open login\nbrowser.goto(https://example.com/login)\n\n// Submit\nclick(#submit)"
//! );
//! ```

use tracing::debug;

use crate::registry::render_step;
use crate::step::Step;

/// Separator placed between rendered entries.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Generate script text for `steps`, in order.
///
/// Never fails and never mutates its input. An empty sequence yields an
/// empty string.
pub fn generate_script(steps: &[Step]) -> String {
    debug!(steps = steps.len(), "generating script");
    steps
        .iter()
        .map(render_step)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Action, LocatorKind, NOT_APPLICABLE};

    fn click(id: &str, locator: &str) -> Step {
        Step::new(id, "Click it", Action::Click, LocatorKind::Css, locator, "", "")
    }

    #[test]
    fn test_empty_sequence_is_empty_string() {
        assert_eq!(generate_script(&[]), "");
    }

    #[test]
    fn test_single_step_has_no_separator() {
        let script = generate_script(&[click("A", ".a")]);
        assert_eq!(script, "// Click it\nclick(.a)");
        assert!(!script.contains(ENTRY_SEPARATOR));
    }

    #[test]
    fn test_entries_joined_by_one_blank_line() {
        let steps = vec![click("A", ".a"), click("B", ".b"), click("C", ".c")];
        let script = generate_script(&steps);
        let entries: Vec<&str> = script.split(ENTRY_SEPARATOR).collect();
        assert_eq!(entries.len(), steps.len());
        assert_eq!(entries[0], "// Click it\nclick(.a)");
        assert_eq!(entries[2], "// Click it\nclick(.c)");
        assert!(!script.contains("\n\n\n"));
    }

    #[test]
    fn test_generation_is_idempotent_and_pure() {
        let steps = vec![
            click("A", ".a"),
            Step::new(
                "B",
                "Scan",
                Action::SpiderScan,
                LocatorKind::Url,
                "https://example.com",
                NOT_APPLICABLE,
                "",
            ),
        ];
        let before = steps.clone();
        let first = generate_script(&steps);
        let second = generate_script(&steps);
        assert_eq!(first, second);
        assert_eq!(steps, before);
    }

    #[test]
    fn test_unknown_action_does_not_break_neighbours() {
        let steps = vec![
            click("A", ".a"),
            Step::new(
                "B",
                "Hover menu",
                Action::from("Hover"),
                LocatorKind::Css,
                ".menu",
                "",
                "",
            ),
            click("C", ".c"),
        ];
        let script = generate_script(&steps);
        assert!(script.contains("// Hover menu\n// Action: Hover, Locator: .menu"));
        assert!(script.ends_with("click(.c)"));
    }
}
