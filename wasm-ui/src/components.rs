//! UI components for the automation showcase.

use qa_steps_rs::{
    Action, COLUMNS, CustomStepDraft, LessonCatalog, LessonIndex, LocatorKind, Step, StepField,
    StepTable, Tab,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// One button per catalog lesson.
#[derive(Properties, PartialEq)]
pub struct LessonPickerProps {
    pub selected: LessonIndex,
    pub on_select: Callback<LessonIndex>,
}

#[function_component(LessonPicker)]
pub fn lesson_picker(props: &LessonPickerProps) -> Html {
    html! {
        <div class="lesson-picker">
            { for LessonCatalog::builtin().iter().map(|(index, lesson)| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("lesson-button", (index == props.selected).then_some("active"))}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(index))}
                    >
                        { lesson.title() }
                    </button>
                }
            })}
        </div>
    }
}

/// Learn / Practice / Script switcher.
#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tab-bar">
            { for Tab::ALL.into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("tab", (tab == props.active).then_some("active"))}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </div>
    }
}

/// Step sequence as a table.
#[derive(Properties, PartialEq)]
pub struct StepTableViewProps {
    pub steps: Vec<Step>,
    #[prop_or_default]
    pub empty_message: AttrValue,
}

#[function_component(StepTableView)]
pub fn step_table_view(props: &StepTableViewProps) -> Html {
    let table = StepTable::new(&props.steps);
    if table.is_empty() && !props.empty_message.is_empty() {
        return html! { <p class="empty-table">{ props.empty_message.clone() }</p> };
    }

    html! {
        <table class="step-table">
            <thead>
                <tr>{ for COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }</tr>
            </thead>
            <tbody>
                { for table.rows().iter().map(|row| html! {
                    <tr key={row[0].to_string()}>
                        { for row.iter().map(|cell| html! { <td>{ cell.to_string() }</td> }) }
                    </tr>
                })}
            </tbody>
        </table>
    }
}

/// Authoring form for a custom step.
#[derive(Properties, PartialEq)]
pub struct StepFormProps {
    pub draft: CustomStepDraft,
    pub locator_kinds: &'static [LocatorKind],
    pub on_change: Callback<(StepField, String)>,
    pub on_commit: Callback<()>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

fn text_input(field: StepField, value: &str, on_change: &Callback<(StepField, String)>) -> Html {
    let on_change = on_change.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit((field, input.value()));
    });
    let list = (field == StepField::Action).then_some("action-options");

    html! {
        <label class={classes!("form-field", field.is_required().then_some("required"))}>
            <span>{ field.label() }</span>
            <input
                name={field.key()}
                list={list}
                value={value.to_string()}
                {oninput}
                spellcheck="false"
            />
        </label>
    }
}

#[function_component(StepForm)]
pub fn step_form(props: &StepFormProps) -> Html {
    let on_kind_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((StepField::LocatorKind, select.value()));
        })
    };

    let on_add = {
        let on_commit = props.on_commit.clone();
        Callback::from(move |_: MouseEvent| on_commit.emit(()))
    };

    let current_kind = props.draft.locator_kind.as_str();

    html! {
        <div class="step-form">
            <datalist id="action-options">
                { for Action::REGISTERED.iter().map(|a| html! { <option value={a.label().to_string()} /> }) }
            </datalist>
            { text_input(StepField::Description, &props.draft.description, &props.on_change) }
            { text_input(StepField::Action, &props.draft.action, &props.on_change) }
            <label class="form-field required">
                <span>{ StepField::LocatorKind.label() }</span>
                <select name={StepField::LocatorKind.key()} onchange={on_kind_change}>
                    <option value="" selected={current_kind.is_empty()}>{ "Select..." }</option>
                    { for props.locator_kinds.iter().map(|k| html! {
                        <option value={k.label().to_string()} selected={k.label() == current_kind}>
                            { k.label() }
                        </option>
                    })}
                </select>
            </label>
            { text_input(StepField::Locator, &props.draft.locator, &props.on_change) }
            { text_input(StepField::TestData, &props.draft.test_data, &props.on_change) }
            { text_input(StepField::ExpectedResult, &props.draft.expected_result, &props.on_change) }
            <div class="form-actions">
                <button class="add-step-button" onclick={on_add}>{ "Add Step" }</button>
                if let Some(hint) = &props.hint {
                    <span class="form-hint">{ hint.clone() }</span>
                }
            </div>
        </div>
    }
}

/// Generated script with a download button.
#[derive(Properties, PartialEq)]
pub struct ScriptPanelProps {
    pub title: AttrValue,
    pub script: AttrValue,
    pub on_download: Callback<()>,
}

#[function_component(ScriptPanel)]
pub fn script_panel(props: &ScriptPanelProps) -> Html {
    let on_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(()))
    };

    html! {
        <div class="panel script-panel">
            <div class="panel-header">
                <h2>{ format!("{} script", props.title) }</h2>
                <button class="save-button" onclick={on_click}>{ "Download" }</button>
            </div>
            <pre class="script-output">{ props.script.clone() }</pre>
        </div>
    }
}
