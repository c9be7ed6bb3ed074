//! Main application component.

use qa_steps_rs::{Event, LessonCatalog, LessonIndex, Session, StepField, Tab, View};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, HtmlAnchorElement, Url};
use yew::prelude::*;

use crate::components::{LessonPicker, ScriptPanel, StepForm, StepTableView, TabBar};

/// File name offered when downloading a generated script.
const SCRIPT_FILE_NAME: &str = "automation-script.txt";

/// Offer `text` to the browser as a file download.
fn download_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));
    let blob = Blob::new_with_str_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let catalog = LessonCatalog::builtin();
    let session = use_state(Session::new);
    let hint = use_state(|| None::<AttrValue>);

    let dispatch = {
        let session = session.clone();
        Callback::from(move |event: Event| {
            session.set((*session).clone().apply(event));
        })
    };

    let on_select_lesson = {
        let dispatch = dispatch.clone();
        let hint = hint.clone();
        Callback::from(move |lesson: LessonIndex| {
            hint.set(None);
            dispatch.emit(Event::SelectLesson(lesson));
        })
    };

    let on_select_tab = dispatch.reform(Event::SelectTab);

    // One edit can be two events; apply them together so neither is lost.
    let on_draft_change = {
        let session = session.clone();
        let hint = hint.clone();
        Callback::from(move |(field, value): (StepField, String)| {
            hint.set(None);
            let events = session.draft_edit(field, value);
            session.set((*session).clone().apply_all(events));
        })
    };

    // Commit is a no-op on an invalid draft; the hint only explains why.
    let on_commit = {
        let dispatch = dispatch.clone();
        let session = session.clone();
        let hint = hint.clone();
        Callback::from(move |_: ()| {
            hint.set(session.form().commit_hint().map(AttrValue::from));
            dispatch.emit(Event::CommitStep);
        })
    };

    let state = session.view_state();
    let content = match session.view(catalog) {
        View::Learn { lesson, .. } => html! {
            <div class="panel learn-panel">
                <div class="panel-header">
                    <h2>{ lesson.title().to_string() }</h2>
                    <span class="hint">{ format!("{} steps", lesson.steps().len()) }</span>
                </div>
                <StepTableView steps={lesson.steps().to_vec()} />
            </div>
        },
        View::Practice {
            draft,
            locator_kinds,
            ..
        } => html! {
            <div class="panel practice-panel">
                <div class="panel-header">
                    <h2>{ "Build your own test" }</h2>
                </div>
                <StepForm
                    draft={draft.clone()}
                    {locator_kinds}
                    on_change={on_draft_change}
                    {on_commit}
                    hint={(*hint).clone()}
                />
                <StepTableView
                    steps={session.form().steps().to_vec()}
                    empty_message="No custom steps yet. Fill in the form and add one."
                />
            </div>
        },
        View::Script { lesson, script } => {
            let on_download = {
                let script = script.clone();
                Callback::from(move |_: ()| {
                    if let Err(e) = download_text(SCRIPT_FILE_NAME, &script) {
                        web_sys::console::error_1(&e);
                    }
                })
            };
            html! {
                <ScriptPanel
                    title={lesson.title().to_string()}
                    script={script}
                    {on_download}
                />
            }
        }
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "Automation Showcase" }</h1>
                    <p class="subtitle">{ "Test steps, lessons and generated scripts" }</p>
                </div>
            </header>

            <main class="main">
                <LessonPicker selected={state.selected_lesson()} on_select={on_select_lesson} />
                <TabBar active={state.active_tab()} on_select={on_select_tab} />
                { content }
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span>{ format!("{} lessons | {} tabs", catalog.len(), Tab::ALL.len()) }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
