//! Landing page after an upload or a bank link.
//!
//! Reads `clientId`, `uploadId` or `connectionId` from the query string
//! and shows what the treasury API knows about them.

use leptos::*;
use leptos_router::use_query_map;

use crate::services::{DataSource, TreasuryService};
use crate::types::{AnalysisStatus, Client};

fn status_view(status: AnalysisStatus) -> impl IntoView {
    let eta = status
        .estimated_time_remaining
        .map(|secs| format!("About {}s remaining", secs));
    let errors = status.errors.unwrap_or_default();

    view! {
        <div class="card analysis-status">
            <h3>"Upload Status"</h3>
            <p class="analysis-stage">{status.stage.label()}</p>
            <progress max="100" value=status.progress.to_string()></progress>
            <p class="muted">{format!("{}% - {}", status.progress, status.message)}</p>
            {eta.map(|eta| view! { <p class="muted">{eta}</p> })}
            <ul class="analysis-errors">
                {errors.into_iter().map(|err| view! { <li>{err}</li> }).collect_view()}
            </ul>
        </div>
    }
}

fn client_view(client: Client) -> impl IntoView {
    view! {
        <div class="card analysis-client">
            <h3>{client.name}</h3>
            <p class="muted">{format!("Relationship manager: {}", client.relationship_manager)}</p>
            <p class="muted">{format!("Accounts: {}", client.account_numbers.join(", "))}</p>
        </div>
    }
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let service = store_value(expect_context::<TreasuryService>());
    let query = use_query_map();

    let param = move |name: &'static str| query.with(|q| q.get(name).cloned());
    let upload_id = move || param("uploadId");
    let client_id = move || param("clientId");
    let connection_id = move || param("connectionId");

    let status = create_local_resource(upload_id, move |id: Option<String>| async move {
        match id {
            Some(id) => Some(service.get_value().get_upload_status(&id).await),
            None => None,
        }
    });
    let client = create_local_resource(client_id, move |id: Option<String>| async move {
        match id {
            Some(id) => Some(service.get_value().get_client(&id).await),
            None => None,
        }
    });

    let nothing_selected =
        move || upload_id().is_none() && client_id().is_none() && connection_id().is_none();

    view! {
        <section class="analysis-page">
            <div class="page-header">
                <h2>"Analysis Dashboard"</h2>
                <p class="muted">
                    "Advanced transaction analysis and cash flow insights will be available here soon."
                </p>
            </div>
            <Show when=nothing_selected fallback=|| view! { }>
                <div class="card">
                    <p class="muted">"No upload selected yet."</p>
                    <a href="/upload" class="button button-outline">"← Back to Upload"</a>
                </div>
            </Show>
            {move || connection_id().map(|id| view! {
                <div class="card analysis-connection">
                    <h3>"🔗 Bank Connection"</h3>
                    <p class="muted">{format!("Connection {} is linked. Transactions will sync automatically.", id)}</p>
                </div>
            })}
            <Suspense fallback=move || view! { <p class="muted">"Loading..."</p> }>
                {move || client.get().flatten().map(|result| match result {
                    Ok(client) => client_view(client).into_view(),
                    Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_view(),
                })}
                {move || status.get().flatten().map(|result| match result {
                    Ok(status) => status_view(status).into_view(),
                    Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_view(),
                })}
            </Suspense>
        </section>
    }
}
