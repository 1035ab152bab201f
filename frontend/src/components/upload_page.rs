//! Upload page: manual statement upload or a direct bank link.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use web_sys::File;

use super::{BankConnectionModal, ClientInfoForm, ConnectedAccounts, FileDropzone};
use crate::config::AppConfig;
use crate::notifications::{notify, ToastKind, ToastQueue};
use crate::services::{DataSource, TreasuryService};
use crate::workflow::{BankConnectionForm, SubmissionOutcome, UploadTab, UploadWorkflow};

/// The upload workflow as used in the browser.
pub type BrowserWorkflow = UploadWorkflow<File>;

/// Banks shown on the connect tab.
pub const FEATURED_BANKS: [&str; 8] = [
    "Chase Business",
    "Bank of America",
    "Wells Fargo",
    "Citi Commercial",
    "PNC Business",
    "US Bank Business",
    "TD Bank Business",
    "Capital One Business",
];

const CONNECT_FEATURES: [(&str, &str, &str); 3] = [
    ("🔒", "Secure Connection", "Bank-grade encryption"),
    ("⚡", "Real-time Data", "Automatic updates"),
    ("🏦", "Multiple Accounts", "All business accounts"),
];

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

fn checklist_item(done: bool, label: String) -> impl IntoView {
    let (class, icon) = if done {
        ("checklist-item done", "✅")
    } else {
        ("checklist-item", "⭕")
    };
    view! {
        <li class=class>
            <span class="checklist-icon">{icon}</span>
            <span>{label}</span>
        </li>
    }
}

#[component]
fn UploadStatusCard(workflow: RwSignal<BrowserWorkflow>) -> impl IntoView {
    let has_info = move || workflow.with(|w| w.client_info().is_some());
    let file_count = move || workflow.with(|w| w.files().len());

    view! {
        <div class="card upload-status">
            <div class="card-header">
                <h3>"Upload Status"</h3>
                <Show when=has_info fallback=|| view! { }>
                    <span class="badge badge-success">"Info Complete"</span>
                </Show>
            </div>
            <ul class="checklist">
                {move || checklist_item(has_info(), "Client information provided".to_string())}
                {move || {
                    checklist_item(
                        file_count() > 0,
                        format!("Bank statements uploaded ({})", file_count()),
                    )
                }}
            </ul>
            {move || workflow.with(|w| w.client_info().map(|info| {
                let name = info.name().to_string();
                let accounts = info.account_numbers().join(", ");
                view! {
                    <div class="client-summary">
                        <p class="client-name">{name}</p>
                        <p class="muted">{accounts}</p>
                    </div>
                }
            }))}
            <Show when=move || workflow.with(|w| w.can_submit()) fallback=|| view! { }>
                <div class="alert alert-success">
                    "Ready to begin analysis! Click \"Start Analysis\" to process the uploaded statements."
                </div>
            </Show>
        </div>
    }
}

#[component]
fn BankConnectionTab(
    form: RwSignal<BankConnectionForm>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    view! {
        <div class="card bank-integration">
            <h3>"🔗 Bank Account Integration"</h3>
            <p class="muted">
                "Connect directly to your business bank account for automatic, real-time transaction import."
            </p>
            <div class="feature-grid">
                {CONNECT_FEATURES
                    .iter()
                    .map(|(icon, title, detail)| view! {
                        <div class="feature">
                            <span class="feature-icon">{*icon}</span>
                            <p class="feature-title">{*title}</p>
                            <p class="muted">{*detail}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <button class="button button-primary" on:click=move |_| form.update(|f| f.open())>
                "Connect Bank Account"
            </button>
        </div>

        <ConnectedAccounts refresh=refresh/>

        <div class="card supported-banks">
            <h3>"Supported Banks"</h3>
            <div class="bank-grid">
                {FEATURED_BANKS
                    .iter()
                    .map(|bank| view! { <div class="bank-tile">{*bank}</div> })
                    .collect_view()}
            </div>
        </div>

        <BankConnectionModal form=form refresh=refresh/>
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let service = store_value(expect_context::<TreasuryService>());
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = store_value(use_navigate());

    let workflow = create_rw_signal(BrowserWorkflow::new(config.staging.clone()));
    let bank_form = create_rw_signal(BankConnectionForm::default());
    let refresh = create_rw_signal(0u32);

    let active_tab = move || workflow.with(|w| w.active_tab());
    let select_tab = move |tab: UploadTab| workflow.update(|w| w.set_active_tab(tab));
    let submitting = move || workflow.with(|w| w.is_submitting());

    let start_analysis = move |_| {
        let Some(request) = workflow.try_update(|w| w.begin_submission()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = service
                .get_value()
                .upload_statement(&request.files, &request.client_info)
                .await;
            let Some(outcome) = workflow.try_update(|w| w.finish_submission(result)) else {
                return;
            };
            match &outcome {
                SubmissionOutcome::Succeeded(receipt) => {
                    notify(toasts, ToastKind::Success, outcome.notification());
                    let target = receipt.navigation_target();
                    navigate.with_value(|navigate| navigate(&target, NavigateOptions::default()));
                }
                SubmissionOutcome::Failed(_) => {
                    notify(toasts, ToastKind::Error, outcome.notification())
                }
            }
        });
    };

    view! {
        <section class="upload-page">
            <div class="page-header">
                <h2>"Upload Bank Statements"</h2>
                <p class="muted">
                    "Upload bank statements or connect your bank account to begin treasury analysis"
                </p>
            </div>

            <div class="tabs" role="tablist">
                <button
                    class=move || tab_class(active_tab() == UploadTab::Manual)
                    role="tab"
                    on:click=move |_| select_tab(UploadTab::Manual)
                >
                    "📄 Manual Upload"
                </button>
                <button
                    class=move || tab_class(active_tab() == UploadTab::Connect)
                    role="tab"
                    on:click=move |_| select_tab(UploadTab::Connect)
                >
                    "🏦 Bank Connection"
                </button>
            </div>

            <Show
                when=move || active_tab() == UploadTab::Manual
                fallback=move || view! { <BankConnectionTab form=bank_form refresh=refresh/> }
            >
                <div class="upload-grid">
                    <ClientInfoForm workflow=workflow/>
                    <UploadStatusCard workflow=workflow/>
                </div>
                <Show
                    when=move || workflow.with(|w| w.client_info().is_some())
                    fallback=|| view! { }
                >
                    <FileDropzone workflow=workflow/>
                </Show>
                <Show when=move || workflow.with(|w| !w.files().is_empty()) fallback=|| view! { }>
                    <div class="actions">
                        <button
                            class="button button-primary button-large"
                            disabled=move || !workflow.with(|w| w.can_submit())
                            on:click=start_analysis
                        >
                            {move || if submitting() { "⏳ Starting Analysis..." } else { "🚀 Start Analysis" }}
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
