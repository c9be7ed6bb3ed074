//! Tabular view of a step sequence.

use crate::step::Step;

/// Column headers, in display order.
pub const COLUMNS: [&str; 7] = [
    "Test ID",
    "Description",
    "Action",
    "Locator Type",
    "Locator",
    "Test Data",
    "Expected Result",
];

/// Rows borrowed from a step slice; one row per step, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTable<'a> {
    rows: Vec<[&'a str; 7]>,
}

impl<'a> StepTable<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        let rows = steps
            .iter()
            .map(|s| {
                [
                    s.test_id(),
                    s.description.as_str(),
                    s.action.label(),
                    s.locator_kind.label(),
                    s.locator.as_str(),
                    s.test_data.as_str(),
                    s.expected_result.as_str(),
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[[&'a str; 7]] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text rendering with space-padded columns, header first.
    pub fn render_text(&self) -> String {
        let mut widths = COLUMNS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[&str; 7]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&COLUMNS));
        lines.push(rule);
        lines.extend(self.rows.iter().map(format_row));
        lines.join("\n")
    }
}
