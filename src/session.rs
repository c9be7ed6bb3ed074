//! Showcase session: the one owned state value the UI holds.
//!
//! Every user action is an [`Event`]; [`Session::apply`] returns the next
//! session, and [`Session::view`] derives what to draw from it.

use crate::authoring::AuthoringForm;
use crate::catalog::{LessonCatalog, LessonIndex};
use crate::step::StepField;
use crate::view::{Tab, View, ViewState, resolve_view};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectLesson(LessonIndex),
    SelectTab(Tab),
    UpdateDraft(StepField, String),
    CommitStep,
}

/// View state plus the authoring form, for one showcase instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    view: ViewState,
    form: AuthoringForm,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn form(&self) -> &AuthoringForm {
        &self.form
    }

    /// Apply one event, fully, and return the resulting session.
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::SelectLesson(lesson) => self.view = self.view.select_lesson(lesson),
            Event::SelectTab(tab) => self.view = self.view.select_tab(tab),
            Event::UpdateDraft(field, value) => self.form.update_draft_field(field, value),
            Event::CommitStep => {
                self.form.commit_step();
            }
        }
        self
    }

    /// Apply events in order.
    #[must_use]
    pub fn apply_all(self, events: impl IntoIterator<Item = Event>) -> Self {
        events.into_iter().fold(self, Session::apply)
    }

    /// Events for one form edit.
    ///
    /// Switching the action to one that does not offer the draft's locator
    /// kind also clears the kind, so the form never holds a kind its
    /// locator-kind options cannot show.
    pub fn draft_edit(&self, field: StepField, value: String) -> Vec<Event> {
        let clear_kind = field == StepField::Action && !self.form.offers_locator_kind(&value);
        let mut events = vec![Event::UpdateDraft(field, value)];
        if clear_kind {
            events.push(Event::UpdateDraft(StepField::LocatorKind, String::new()));
        }
        events
    }

    pub fn view<'a>(&'a self, catalog: &'a LessonCatalog) -> View<'a> {
        resolve_view(&self.view, catalog, &self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::LocatorKind;

    fn draft_events(action: &str, kind: &str, locator: &str) -> Vec<Event> {
        vec![
            Event::UpdateDraft(StepField::Action, action.to_string()),
            Event::UpdateDraft(StepField::LocatorKind, kind.to_string()),
            Event::UpdateDraft(StepField::Locator, locator.to_string()),
        ]
    }

    #[test]
    fn test_apply_sequence() {
        let catalog = LessonCatalog::builtin();
        let mut session = Session::new().apply(Event::SelectTab(Tab::Practice));
        for event in draft_events("Click", "CSS", ".btn") {
            session = session.apply(event);
        }
        session = session.apply(Event::CommitStep);

        assert_eq!(session.form().steps().len(), 1);
        assert!(session.form().draft().is_empty());
        assert_eq!(session.view(catalog).tab(), Tab::Practice);
    }

    #[test]
    fn test_rejected_commit_keeps_session() {
        let mut session = Session::new();
        for event in draft_events("", "CSS", ".btn") {
            session = session.apply(event);
        }
        let before = session.clone();
        let after = session.apply(Event::CommitStep);
        assert_eq!(after, before);
    }

    #[test]
    fn test_select_lesson_returns_to_learn() {
        let catalog = LessonCatalog::builtin();
        let security = catalog.find("Security Scan").unwrap();
        let session = Session::new()
            .apply(Event::SelectTab(Tab::Script))
            .apply(Event::SelectLesson(security));
        assert_eq!(session.view_state().active_tab(), Tab::Learn);
        match session.view(catalog) {
            View::Learn { lesson, .. } => assert_eq!(lesson.title(), "Security Scan"),
            other => panic!("expected Learn, got {:?}", other.tab()),
        }
    }

    #[test]
    fn test_action_change_clears_unoffered_kind() {
        let session = Session::new()
            .apply(Event::SelectTab(Tab::Practice))
            .apply_all(draft_events("Click", "CSS", "#login"));

        let edit = session.draft_edit(StepField::Action, "Navigate".to_string());
        let session = session.apply_all(edit).apply(Event::CommitStep);

        assert!(session.form().steps().is_empty());
        assert_eq!(session.form().draft().action, "Navigate");
        assert_eq!(session.form().draft().locator_kind, "");
        assert_eq!(session.form().draft().locator, "#login");
    }

    #[test]
    fn test_action_change_keeps_offered_kind() {
        let session = Session::new().apply_all(draft_events("Click", "CSS", ".btn"));
        let edit = session.draft_edit(StepField::Action, "Type".to_string());
        assert_eq!(edit, vec![Event::UpdateDraft(StepField::Action, "Type".to_string())]);

        let session = session.apply_all(edit).apply(Event::CommitStep);
        assert_eq!(session.form().steps()[0].locator_kind, LocatorKind::Css);
    }

    #[test]
    fn test_non_action_edit_is_single_event() {
        let session = Session::new().apply_all(draft_events("Navigate", "URL", "https://a.test"));
        let edit = session.draft_edit(StepField::Locator, "https://b.test".to_string());
        assert_eq!(edit.len(), 1);
    }

    #[test]
    fn test_custom_steps_survive_lesson_switches() {
        let catalog = LessonCatalog::builtin();
        let mut session = Session::new();
        for event in draft_events("Navigate", "URL", "https://example.com") {
            session = session.apply(event);
        }
        session = session
            .apply(Event::CommitStep)
            .apply(Event::SelectLesson(catalog.index(2).unwrap()))
            .apply(Event::SelectLesson(LessonIndex::FIRST));
        assert_eq!(session.form().steps().len(), 1);
    }
}
