//! End-to-end flows through the public API.

use qa_steps_rs::{
    Event, LessonCatalog, Session, StepField, Tab, View, generate_script, render_step,
};

fn author(session: Session, action: &str, kind: &str, locator: &str) -> Session {
    session
        .apply(Event::UpdateDraft(StepField::Action, action.to_string()))
        .apply(Event::UpdateDraft(StepField::LocatorKind, kind.to_string()))
        .apply(Event::UpdateDraft(StepField::Locator, locator.to_string()))
        .apply(Event::CommitStep)
}

#[test]
fn test_login_lesson_script_starts_with_navigation() {
    let catalog = LessonCatalog::builtin();
    let session = Session::new().apply(Event::SelectTab(Tab::Script));

    let View::Script { script, .. } = session.view(catalog) else {
        panic!("expected script view");
    };
    assert!(script.starts_with(
        "// Open the login page\nbrowser.goto(https://example.com/login)\n\n"
    ));
}

#[test]
fn test_every_lesson_script_has_one_entry_per_step() {
    let catalog = LessonCatalog::builtin();
    for (index, lesson) in catalog.iter() {
        let session = Session::new()
            .apply(Event::SelectLesson(index))
            .apply(Event::SelectTab(Tab::Script));
        let View::Script { script, .. } = session.view(catalog) else {
            panic!("expected script view for {}", lesson.title());
        };
        let entries: Vec<&str> = script.split("\n\n").collect();
        assert_eq!(entries.len(), lesson.steps().len(), "{}", lesson.title());
        for (entry, step) in entries.iter().zip(lesson.steps()) {
            assert_eq!(*entry, render_step(step));
        }
    }
}

#[test]
fn test_security_scan_templates() {
    let catalog = LessonCatalog::builtin();
    let lesson = catalog.lesson(catalog.find("Security Scan").unwrap());
    let script = generate_script(lesson.steps());
    assert!(script.contains("spider.scan(https://example.com)"));
    assert!(script.contains("ascan.scan(https://example.com)\n"));
    assert!(script.contains("core.alerts(https://example.com)"));
    assert!(script.ends_with("ascan.scan(https://example.com, recurse=true)"));
}

#[test]
fn test_practice_flow_keeps_order_in_table_and_script() {
    let catalog = LessonCatalog::builtin();
    let mut session = Session::new().apply(Event::SelectTab(Tab::Practice));
    session = author(session, "Navigate", "URL", "https://shop.example.com");
    session = author(session, "", "CSS", ".ignored");
    // The rejected draft stays in the form until overwritten.
    assert_eq!(session.form().draft().locator, ".ignored");
    session = author(session, "Click", "CSS", "#add-to-cart");
    assert!(session.form().draft().is_empty());

    let steps = session.form().steps();
    assert_eq!(steps.len(), 2);
    assert_ne!(steps[0].test_id(), steps[1].test_id());

    match session.view(catalog) {
        View::Practice { table, .. } => {
            assert_eq!(table.rows()[0][2], "Navigate");
            assert_eq!(table.rows()[1][2], "Click");
        }
        other => panic!("expected practice view, got {:?}", other.tab()),
    }

    assert_eq!(
        generate_script(steps),
        "// Navigate\nbrowser.goto(https://shop.example.com)\n\n// Click\nclick(#add-to-cart)"
    );
}
