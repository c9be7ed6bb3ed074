//! Lesson catalog.
//!
//! Curated, read-only step sequences. The catalog is fixed once built; the
//! only mutable step sequence in the crate is the authoring form's.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Result, StepError};
use crate::step::{Action, LocatorKind, NOT_APPLICABLE, Step};

/// A named, ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    title: String,
    steps: Vec<Step>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Position of a lesson in a [`LessonCatalog`].
///
/// Only a catalog hands these out, so every index a view holds refers to a
/// lesson that exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonIndex(usize);

impl LessonIndex {
    /// The first lesson; valid for every catalog since catalogs are non-empty.
    pub const FIRST: LessonIndex = LessonIndex(0);

    pub fn get(self) -> usize {
        self.0
    }
}

/// Ordered set of lessons. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

static BUILTIN: Lazy<LessonCatalog> = Lazy::new(|| LessonCatalog {
    lessons: builtin_lessons(),
});

impl LessonCatalog {
    pub fn new(lessons: Vec<Lesson>) -> Result<Self> {
        if lessons.is_empty() {
            return Err(StepError::EmptyCatalog);
        }
        Ok(Self { lessons })
    }

    /// The process-wide catalog shown by the showcase.
    pub fn builtin() -> &'static LessonCatalog {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look up a lesson.
    ///
    /// # Panics
    ///
    /// Panics if `index` was issued by a different, larger catalog. That is
    /// a programming error, not a recoverable condition.
    pub fn lesson(&self, index: LessonIndex) -> &Lesson {
        &self.lessons[index.0]
    }

    /// Checked conversion from a raw position.
    pub fn index(&self, position: usize) -> Option<LessonIndex> {
        (position < self.lessons.len()).then_some(LessonIndex(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LessonIndex, &Lesson)> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| (LessonIndex(i), lesson))
    }

    /// Resolve a user-supplied lesson reference: a 0-based position or a
    /// case-insensitive title.
    pub fn find(&self, query: &str) -> Result<LessonIndex> {
        let query = query.trim();
        if let Ok(position) = query.parse::<usize>() {
            return self
                .index(position)
                .ok_or_else(|| StepError::UnknownLesson(query.to_string()));
        }
        self.iter()
            .find(|(_, lesson)| lesson.title.eq_ignore_ascii_case(query))
            .map(|(index, _)| index)
            .ok_or_else(|| StepError::UnknownLesson(query.to_string()))
    }
}

fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "Login Flow",
            vec![
                Step::new(
                    "TC-LOGIN-01",
                    "Open the login page",
                    Action::Navigate,
                    LocatorKind::Url,
                    "https://example.com/login",
                    NOT_APPLICABLE,
                    "Login form is displayed",
                ),
                Step::new(
                    "TC-LOGIN-02",
                    "Enter username",
                    Action::Type,
                    LocatorKind::Id,
                    "#username",
                    "qa.user@example.com",
                    "Username field is filled",
                ),
                Step::new(
                    "TC-LOGIN-03",
                    "Enter password",
                    Action::Type,
                    LocatorKind::Id,
                    "#password",
                    "S3cure!Pass",
                    "Password field is masked",
                ),
                Step::new(
                    "TC-LOGIN-04",
                    "Submit the form",
                    Action::Click,
                    LocatorKind::Css,
                    "button[type='submit']",
                    NOT_APPLICABLE,
                    "Form is submitted",
                ),
                Step::new(
                    "TC-LOGIN-05",
                    "Wait for the dashboard",
                    Action::Wait,
                    LocatorKind::Css,
                    ".dashboard",
                    "2000",
                    "Dashboard has loaded",
                ),
                Step::new(
                    "TC-LOGIN-06",
                    "Verify welcome banner",
                    Action::Assert,
                    LocatorKind::Css,
                    ".welcome-banner",
                    NOT_APPLICABLE,
                    "Welcome back, QA User",
                ),
            ],
        ),
        Lesson::new(
            "API Testing",
            vec![
                Step::new(
                    "TC-API-01",
                    "Fetch the user list",
                    Action::ApiRequest,
                    LocatorKind::Endpoint,
                    "/api/v1/users",
                    NOT_APPLICABLE,
                    "200 OK with a JSON array",
                ),
                Step::new(
                    "TC-API-02",
                    "Check the first user's email",
                    Action::Assert,
                    LocatorKind::JsonPath,
                    "$.data[0].email",
                    NOT_APPLICABLE,
                    "qa.user@example.com",
                ),
                Step::new(
                    "TC-API-03",
                    "Cross-check the database",
                    Action::Query,
                    LocatorKind::Sql,
                    "SELECT email FROM users WHERE id = 1",
                    NOT_APPLICABLE,
                    "Email matches the API response",
                ),
            ],
        ),
        Lesson::new(
            "Security Scan",
            vec![
                Step::new(
                    "TC-SEC-01",
                    "Crawl the application",
                    Action::SpiderScan,
                    LocatorKind::Url,
                    "https://example.com",
                    NOT_APPLICABLE,
                    "All reachable URLs are discovered",
                ),
                Step::new(
                    "TC-SEC-02",
                    "Run the active scan",
                    Action::ActiveScan,
                    LocatorKind::Url,
                    "https://example.com",
                    "Default Policy",
                    "Scan completes without errors",
                ),
                Step::new(
                    "TC-SEC-03",
                    "Review raised alerts",
                    Action::Review,
                    LocatorKind::Url,
                    "https://example.com",
                    NOT_APPLICABLE,
                    "Alerts are triaged by risk",
                ),
                Step::new(
                    "TC-SEC-04",
                    "Re-scan after fixes",
                    Action::Rescan,
                    LocatorKind::Url,
                    "https://example.com",
                    NOT_APPLICABLE,
                    "No high-risk alerts remain",
                ),
            ],
        ),
    ]
}
