//! Priority sequence panel: the completion walk-through plus the sequence editor.
use hexa_core::{
    Character, EditorError, EditorEvent, ImportOutcome, Progress, Sequence, SequenceEditor,
    StepForm, completion_rows, completion_summary, export_sequence, import_sequence,
    job_node_data, sequence_file_name,
};
use yew::prelude::*;

use crate::components::priority_item::PriorityItem;
use crate::components::step_form::StepFormView;
use crate::components::transfer_drawer::TransferDrawer;
use crate::dom;


#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub character: Character,
    /// New custom sequence for the character.
    pub on_update_sequence: Callback<Sequence>,
    /// Drop the custom sequence so the job default applies again.
    pub on_reset_sequence: Callback<()>,
    /// `(node_id, target_level)` of a step the user marked as done.
    pub on_complete_step: Callback<(String, u8)>,
    /// Open in edit mode on first render. Later toggles are local state.
    #[prop_or_default]
    pub start_in_edit: bool,
}

/// Applies editor transitions and forwards the resulting events.
#[derive(Clone)]
struct EditorHandle {
    editor: UseStateHandle<SequenceEditor>,
    progress: Progress,
    on_update_sequence: Callback<Sequence>,
    on_reset_sequence: Callback<()>,
}

impl EditorHandle {
    fn apply(
        &self,
        op: impl FnOnce(&mut SequenceEditor, &Progress) -> Result<Option<EditorEvent>, EditorError>,
    ) {
        let mut next = (*self.editor).clone();
        let outcome = op(&mut next, &self.progress);
        self.editor.set(next);
        match outcome {
            Ok(Some(event)) => self.publish(event),
            Ok(None) => {}
            Err(err) => log::debug!("sequence editor: {err}"),
        }
    }

    fn publish(&self, event: EditorEvent) {
        match event {
            EditorEvent::SequenceChanged(sequence) => self.on_update_sequence.emit(sequence),
            EditorEvent::ResetRequested => self.on_reset_sequence.emit(()),
        }
    }

    fn callback<IN, F>(&self, op: F) -> Callback<IN>
    where
        IN: 'static,
        F: Fn(IN, &mut SequenceEditor, &Progress) -> Result<Option<EditorEvent>, EditorError>
            + 'static,
    {
        let handle = self.clone();
        Callback::from(move |input: IN| handle.apply(|editor, progress| op(input, editor, progress)))
    }
}

/// Callbacks shared by the editing rows.
struct EditCallbacks {
    begin_insert: Callback<usize>,
    begin_edit: Callback<usize>,
    remove: Callback<usize>,
    reorder: Callback<(usize, usize)>,
    select_node: Callback<String>,
    level_input: Callback<String>,
    level_blur: Callback<()>,
    submit: Callback<()>,
    cancel: Callback<()>,
}

#[function_component(PriorityList)]
pub fn priority_list(p: &Props) -> Html {
    let editor = {
        let job = p.character.job.clone();
        let sequence = p.character.active_sequence();
        let is_custom = p.character.is_custom();
        let start_in_edit = p.start_in_edit;
        use_state(move || {
            let mut editor = SequenceEditor::new(job, sequence, is_custom);
            if start_in_edit {
                editor.toggle_edit();
            }
            editor
        })
    };
    let show_reached = use_state(|| false);
    let show_transfer = use_state(|| false);

    {
        let editor = editor.clone();
        let sequence = p.character.active_sequence();
        let is_custom = p.character.is_custom();
        use_effect_with((sequence, is_custom), move |(sequence, is_custom)| {
            let mut next = (*editor).clone();
            next.sync(sequence, *is_custom);
            if next != *editor {
                editor.set(next);
            }
            || ()
        });
    }

    let handle = EditorHandle {
        editor: editor.clone(),
        progress: p.character.skill_progress.clone(),
        on_update_sequence: p.on_update_sequence.clone(),
        on_reset_sequence: p.on_reset_sequence.clone(),
    };

    let toggle_edit = handle.callback(|_: MouseEvent, editor, _| {
        if let Some(draft) = editor.toggle_edit() {
            log::debug!("sequence editor closed with {} steps", draft.len());
        }
        Ok(None)
    });
    let reset = handle.callback(|_: MouseEvent, editor, _| {
        if !dom::confirm("Reset this character's sequence to the job default?") {
            return Ok(None);
        }
        editor.reset_to_default().map(Some)
    });
    let callbacks = EditCallbacks {
        begin_insert: handle.callback(|at: usize, editor, progress| {
            editor.begin_insert(at, progress).map(|()| None)
        }),
        begin_edit: handle.callback(|at: usize, editor, _| editor.begin_edit(at).map(|()| None)),
        remove: handle.callback(|at: usize, editor, _| editor.remove(at).map(Some)),
        reorder: handle.callback(|(from, to): (usize, usize), editor, _| editor.reorder(from, to)),
        select_node: handle.callback(|node_id: String, editor, progress| {
            editor.select_node(&node_id, progress).map(|()| None)
        }),
        level_input: handle.callback(|text: String, editor, _| {
            editor.set_level_text(text).map(|()| None)
        }),
        level_blur: handle.callback(|(): (), editor, progress| {
            editor.blur_level(progress).map(|()| None)
        }),
        submit: handle.callback(|(): (), editor, progress| editor.submit(progress).map(Some)),
        cancel: handle.callback(|(): (), editor, _| {
            editor.cancel();
            Ok(None)
        }),
    };

    let complete = {
        let cb = p.on_complete_step.clone();
        let draft = editor.draft().clone();
        Callback::from(move |index: usize| {
            if let Some(step) = draft.get(index) {
                cb.emit((step.node_id.clone(), step.target_level));
            }
        })
    };
    let toggle_reached = {
        let show_reached = show_reached.clone();
        Callback::from(move |_: MouseEvent| show_reached.set(!*show_reached))
    };
    let open_transfer = {
        let show_transfer = show_transfer.clone();
        Callback::from(move |_: MouseEvent| show_transfer.set(true))
    };
    let close_transfer = {
        let show_transfer = show_transfer.clone();
        Callback::from(move |()| show_transfer.set(false))
    };
    let export = {
        let job = p.character.job.clone();
        let draft = editor.draft().clone();
        Callback::from(move |()| export_to_file(&job, &draft))
    };
    let import = {
        let job = p.character.job.clone();
        let is_custom = editor.is_custom();
        let on_update = p.on_update_sequence.clone();
        let show_transfer = show_transfer.clone();
        Callback::from(move |raw: String| {
            if let Some(sequence) = import_from_text(&raw, &job, is_custom) {
                on_update.emit(sequence);
                show_transfer.set(false);
            }
        })
    };

    let job = AttrValue::from(p.character.job.clone());
    let progress = &p.character.skill_progress;
    let summary = completion_summary(&job, editor.draft(), progress);
    let body = if editor.is_editing() {
        editing_rows(&job, &editor, &callbacks)
    } else {
        viewing_rows(&job, &editor, progress, *show_reached, &complete)
    };

    html! {
        <section class="priority-list">
            <div class="priority-list__header">
                <h2>{ "Upgrade Priority" }</h2>
                <span class="priority-list__summary">
                    { format!("{}/{} done", summary.done, summary.total) }
                </span>
                if editor.is_custom() {
                    <span class="priority-list__badge">{ "Custom" }</span>
                }
            </div>
            <div class="priority-list__toolbar">
                if editor.is_editing() {
                    <>
                        <button class="priority-list__toggle" onclick={toggle_edit}>{ "Done" }</button>
                        if editor.is_custom() {
                            <button class="priority-list__reset" onclick={reset}>{ "Reset to default" }</button>
                        }
                    </>
                } else {
                    <>
                        <button class="priority-list__toggle" onclick={toggle_edit}>{ "Edit" }</button>
                        <button class="priority-list__reached" onclick={toggle_reached}>
                            { if *show_reached { "Hide reached" } else { "Show reached" } }
                        </button>
                    </>
                }
                <button class="priority-list__transfer" onclick={open_transfer}>{ "Import / Export" }</button>
            </div>
            <ol class="priority-list__steps">{ body }</ol>
            <TransferDrawer
                open={*show_transfer}
                title={AttrValue::from("Priority sequence")}
                description={Some(AttrValue::from(format!("Sequences can only be imported into a {job} character.")))}
                on_close={close_transfer}
                on_export={export}
                on_import={import}
            />
        </section>
    }
}

fn viewing_rows(
    job: &str,
    editor: &SequenceEditor,
    progress: &Progress,
    show_reached: bool,
    on_complete: &Callback<usize>,
) -> Html {
    if editor.draft().is_empty() {
        return html! { <li class="priority-list__empty">{ "No upgrade sequence defined." }</li> };
    }
    let rows = completion_rows(job, editor.draft(), progress, show_reached);
    if rows.is_empty() {
        return html! { <li class="priority-list__empty">{ "Every step is reached." }</li> };
    }
    rows.into_iter()
        .map(|row| {
            html! {
                <PriorityItem
                    key={row.index}
                    index={row.index}
                    step={row.step}
                    node={Some(row.node)}
                    done={row.done}
                    on_complete={on_complete.clone()}
                />
            }
        })
        .collect()
}

fn editing_rows(job: &AttrValue, editor: &SequenceEditor, cb: &EditCallbacks) -> Html {
    let draft = editor.draft();
    let last = draft.len().saturating_sub(1);
    let form_view = |form: &StepForm, confirm_label: &'static str| {
        html! {
            <StepFormView
                job={job.clone()}
                form={form.clone()}
                confirm_label={AttrValue::from(confirm_label)}
                on_select_node={cb.select_node.clone()}
                on_level_input={cb.level_input.clone()}
                on_level_blur={cb.level_blur.clone()}
                on_submit={cb.submit.clone()}
                on_cancel={cb.cancel.clone()}
            />
        }
    };
    let insert_slot = |at: usize| match editor.form() {
        Some(form) if editor.inserting_at() == Some(at) => form_view(form, "Add"),
        _ => {
            let begin = cb.begin_insert.clone();
            let onclick = Callback::from(move |_: MouseEvent| begin.emit(at));
            html! {
                <li class="priority-list__insert">
                    <button aria-label="Insert step here" {onclick}>{ "+" }</button>
                </li>
            }
        }
    };

    let mut rows: Vec<Html> = Vec::with_capacity(draft.len() * 2 + 1);
    for (index, step) in draft.iter().enumerate() {
        rows.push(insert_slot(index));
        let row = match editor.form() {
            Some(form) if editor.editing_at() == Some(index) => form_view(form, "Save"),
            _ => html! {
                <PriorityItem
                    index={index}
                    step={step.clone()}
                    node={job_node_data(job, &step.node_id)}
                    editable=true
                    is_last={index == last}
                    on_edit={cb.begin_edit.clone()}
                    on_remove={cb.remove.clone()}
                    on_move={cb.reorder.clone()}
                />
            },
        };
        rows.push(row);
    }
    rows.push(insert_slot(draft.len()));
    rows.into_iter().collect()
}

fn export_to_file(job: &str, draft: &Sequence) {
    match export_sequence(job, draft) {
        Ok(text) => {
            dom::copy_to_clipboard(&text);
            if let Err(err) = dom::download_json(&sequence_file_name(job), &text) {
                log::error!("sequence download failed: {}", dom::js_error_message(&err));
            }
        }
        Err(err) => {
            log::error!("sequence export failed: {err}");
            dom::alert(&format!("Export failed: {err}"));
        }
    }
}

/// Parse and gate an imported sequence, asking before a custom one is replaced.
fn import_from_text(raw: &str, job: &str, is_custom: bool) -> Option<Sequence> {
    let outcome = import_sequence(raw, job, is_custom, || {
        dom::confirm("This character already has a custom sequence. Replace it with the imported one?")
    });
    match outcome {
        Ok(ImportOutcome::Applied(sequence)) => Some(sequence),
        Ok(ImportOutcome::Declined) => None,
        Err(err) => {
            log::warn!("sequence import rejected: {err}");
            dom::alert(&format!("Import failed: {err}"));
            None
        }
    }
}
