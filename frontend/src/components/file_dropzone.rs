//! Statement dropzone with drag & drop support.
//!
//! Collects browser files into candidates, stages them through the
//! workflow and lists what was accepted.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use super::BrowserWorkflow;
use crate::types::AcceptedFileType;
use crate::workflow::{format_size, FileCandidate, FileStatus, StagedFile};

const FILE_INPUT_ID: &str = "statementInput";

fn candidates_from(list: &FileList) -> Vec<FileCandidate<File>> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| FileCandidate {
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size() as u64,
            payload: file,
        })
        .collect()
}

fn file_row(workflow: RwSignal<BrowserWorkflow>, file: StagedFile<File>) -> impl IntoView {
    let id = file.id.clone();
    let removable = !matches!(file.status, FileStatus::Uploading { .. });
    let detail = match &file.status {
        FileStatus::Error { message } => {
            Some(view! { <span class="file-error">{message.clone()}</span> }.into_view())
        }
        FileStatus::Uploading { progress: Some(progress) } => Some(
            view! { <progress class="file-progress" max="100" value=progress.to_string()></progress> }
                .into_view(),
        ),
        _ => None,
    };

    view! {
        <div class="file-row">
            <span class="file-status">{file.status.icon()}</span>
            <div class="file-info">
                <p class="file-name">{file.name.clone()}</p>
                <p class="file-meta">{format_size(file.size_bytes)}</p>
                {detail}
            </div>
            <Show
                when=move || removable && !workflow.with(|w| w.is_submitting())
                fallback=|| view! { }
            >
                {
                    let id = id.clone();
                    view! {
                        <button
                            class="button button-ghost"
                            aria-label="Remove file"
                            on:click=move |_| {
                                workflow.update(|w| {
                                    w.remove_file(&id);
                                })
                            }
                        >
                            "✕"
                        </button>
                    }
                }
            </Show>
        </div>
    }
}

#[component]
pub fn FileDropzone(workflow: RwSignal<BrowserWorkflow>) -> impl IntoView {
    let (errors, set_errors) = create_signal(Vec::<String>::new());
    let (drag_active, set_drag_active) = create_signal(false);
    let submitting = move || workflow.with(|w| w.is_submitting());
    let hint = workflow.with_untracked(|w| w.staging_config().hint());

    let stage_files = move |list: FileList| {
        let candidates = candidates_from(&list);
        if candidates.is_empty() {
            return;
        }
        if let Some(outcome) = workflow.try_update(|w| w.stage(candidates)) {
            log::info!(
                "📎 {} file(s) staged, {} rejected",
                outcome.accepted.len(),
                outcome.rejected.len()
            );
            set_errors.set(outcome.errors());
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            stage_files(files);
        }
        // Allow picking the same file again after removing it.
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if submitting() {
            return;
        }
        if let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            stage_files(files);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !submitting() {
            set_drag_active.set(true);
        }
    };

    let trigger_file_input = move |_| {
        if submitting() {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="card dropzone-card">
            <div
                class=move || {
                    match (drag_active.get(), submitting()) {
                        (_, true) => "dropzone disabled",
                        (true, false) => "dropzone drag-active",
                        _ => "dropzone",
                    }
                }
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">
                    {move || if drag_active.get() {
                        "Drop files here..."
                    } else {
                        "Drag & drop bank statements here, or click to select files"
                    }}
                </p>
                <p class="upload-hint">{hint}</p>
                <button type="button" class="button button-outline" disabled=submitting>
                    "Select Files"
                </button>
            </div>
            <input
                type="file"
                id=FILE_INPUT_ID
                multiple=true
                accept=AcceptedFileType::accept_attribute()
                style="display: none;"
                on:change=on_file_change
            />

            <Show when=move || !errors.with(|e| e.is_empty()) fallback=|| view! { }>
                <div class="alert alert-error" role="alert">
                    <ul>
                        {move || errors.get().into_iter().map(|err| view! { <li>{err}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <Show when=move || workflow.with(|w| !w.files().is_empty()) fallback=|| view! { }>
                <div class="file-list">
                    <h4>{move || format!("Selected Files ({})", workflow.with(|w| w.files().len()))}</h4>
                    <For
                        each=move || workflow.with(|w| w.files().to_vec())
                        key=|file| file.id.clone()
                        children=move |file| file_row(workflow, file)
                    />
                </div>
            </Show>
        </div>
    }
}
