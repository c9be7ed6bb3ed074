//! View controller.
//!
//! A two-field state machine (selected lesson x active tab) and the pure
//! function that derives what to display from it. Transitions take the state
//! by value and return the next one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::authoring::AuthoringForm;
use crate::catalog::{Lesson, LessonCatalog, LessonIndex};
use crate::error::StepError;
use crate::script::generate_script;
use crate::step::{CustomStepDraft, LocatorKind};
use crate::table::StepTable;

/// Display mode of the showcase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    /// Table of the selected lesson.
    #[default]
    Learn,
    /// Authoring form plus the custom sequence.
    Practice,
    /// Generated script for the selected lesson.
    Script,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Learn, Tab::Practice, Tab::Script];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Learn => "Learn",
            Tab::Practice => "Practice",
            Tab::Script => "Script",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StepError::UnknownTab(s.to_string()))
    }
}

/// Which lesson and which tab are showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    selected_lesson: LessonIndex,
    active_tab: Tab,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_lesson(&self) -> LessonIndex {
        self.selected_lesson
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch lesson. Always lands on [`Tab::Learn`].
    #[must_use]
    pub fn select_lesson(self, lesson: LessonIndex) -> Self {
        Self {
            selected_lesson: lesson,
            active_tab: Tab::Learn,
        }
    }

    /// Switch tab, keeping the selected lesson.
    #[must_use]
    pub fn select_tab(self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self
        }
    }
}

/// What to display for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Learn {
        lesson: &'a Lesson,
        table: StepTable<'a>,
    },
    Practice {
        draft: &'a CustomStepDraft,
        locator_kinds: &'static [LocatorKind],
        table: StepTable<'a>,
    },
    Script {
        lesson: &'a Lesson,
        script: String,
    },
}

impl View<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            View::Learn { .. } => Tab::Learn,
            View::Practice { .. } => Tab::Practice,
            View::Script { .. } => Tab::Script,
        }
    }
}

/// Derive the view for `state`.
///
/// The Script tab always renders the selected catalog lesson, never the
/// custom sequence.
pub fn resolve_view<'a>(
    state: &ViewState,
    catalog: &'a LessonCatalog,
    form: &'a AuthoringForm,
) -> View<'a> {
    match state.active_tab {
        Tab::Learn => {
            let lesson = catalog.lesson(state.selected_lesson);
            View::Learn {
                lesson,
                table: StepTable::new(lesson.steps()),
            }
        }
        Tab::Practice => View::Practice {
            draft: form.draft(),
            locator_kinds: form.locator_kind_options(),
            table: StepTable::new(form.steps()),
        },
        Tab::Script => {
            let lesson = catalog.lesson(state.selected_lesson);
            View::Script {
                lesson,
                script: generate_script(lesson.steps()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepField;

    fn lesson(catalog: &LessonCatalog, i: usize) -> LessonIndex {
        catalog.index(i).unwrap()
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.selected_lesson(), LessonIndex::FIRST);
        assert_eq!(state.active_tab(), Tab::Learn);
    }

    #[test]
    fn test_select_lesson_forces_learn_from_every_tab() {
        let catalog = LessonCatalog::builtin();
        for tab in Tab::ALL {
            for (index, _) in catalog.iter() {
                let state = ViewState::new().select_tab(tab).select_lesson(index);
                assert_eq!(state.active_tab(), Tab::Learn);
                assert_eq!(state.selected_lesson(), index);
            }
        }
    }

    #[test]
    fn test_select_tab_keeps_lesson() {
        let catalog = LessonCatalog::builtin();
        let state = ViewState::new()
            .select_lesson(lesson(catalog, 2))
            .select_tab(Tab::Script);
        assert_eq!(state.selected_lesson().get(), 2);
        assert_eq!(state.active_tab(), Tab::Script);
    }

    #[test]
    fn test_learn_view_tables_selected_lesson() {
        let catalog = LessonCatalog::builtin();
        let form = AuthoringForm::new();
        let state = ViewState::new().select_lesson(lesson(catalog, 1));
        match resolve_view(&state, catalog, &form) {
            View::Learn { lesson, table } => {
                assert_eq!(lesson.title(), "API Testing");
                assert_eq!(table.rows().len(), lesson.steps().len());
            }
            other => panic!("expected Learn, got {:?}", other.tab()),
        }
    }

    #[test]
    fn test_practice_view_shows_custom_sequence() {
        let catalog = LessonCatalog::builtin();
        let mut form = AuthoringForm::new();
        form.update_draft_field(StepField::Action, "Click");
        form.update_draft_field(StepField::LocatorKind, "CSS");
        form.update_draft_field(StepField::Locator, ".btn");
        form.commit_step();
        form.update_draft_field(StepField::Action, "Navigate");

        let state = ViewState::new().select_tab(Tab::Practice);
        match resolve_view(&state, catalog, &form) {
            View::Practice {
                draft,
                locator_kinds,
                table,
            } => {
                assert_eq!(draft.action, "Navigate");
                assert_eq!(locator_kinds, &[LocatorKind::Url]);
                assert_eq!(table.rows().len(), 1);
                assert_eq!(table.rows()[0][4], ".btn");
            }
            other => panic!("expected Practice, got {:?}", other.tab()),
        }
    }

    #[test]
    fn test_script_view_ignores_custom_sequence() {
        let catalog = LessonCatalog::builtin();
        let mut form = AuthoringForm::new();
        form.update_draft_field(StepField::Action, "Click");
        form.update_draft_field(StepField::LocatorKind, "CSS");
        form.update_draft_field(StepField::Locator, ".custom-only");
        form.commit_step();

        let state = ViewState::new().select_tab(Tab::Script);
        match resolve_view(&state, catalog, &form) {
            View::Script { lesson, script } => {
                assert_eq!(lesson.title(), "Login Flow");
                assert_eq!(script, generate_script(lesson.steps()));
                assert!(!script.contains(".custom-only"));
            }
            other => panic!("expected Script, got {:?}", other.tab()),
        }
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("script".parse::<Tab>().unwrap(), Tab::Script);
        assert_eq!(" Practice ".parse::<Tab>().unwrap(), Tab::Practice);
        assert!(matches!("debug".parse::<Tab>(), Err(StepError::UnknownTab(_))));
    }
}
