//! Linked bank accounts with a disconnect action.

use leptos::*;

use crate::notifications::{notify, ToastKind, ToastQueue};
use crate::services::{DataSource, TreasuryService};
use crate::types::BankConnection;

/// Lists existing bank links. Reloads whenever `refresh` changes.
#[component]
pub fn ConnectedAccounts(refresh: RwSignal<u32>) -> impl IntoView {
    let service = store_value(expect_context::<TreasuryService>());
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let removed = create_rw_signal(Vec::<String>::new());

    let connections = create_local_resource(
        move || refresh.get(),
        move |_| async move { service.get_value().get_bank_connections().await },
    );

    let disconnect = move |connection: BankConnection| {
        spawn_local(async move {
            match service.get_value().disconnect_bank(&connection.id).await {
                Ok(true) => {
                    removed.update(|ids| ids.push(connection.id.clone()));
                    notify(
                        toasts,
                        ToastKind::Success,
                        format!("{} disconnected", connection.bank_name),
                    );
                }
                Ok(false) => notify(
                    toasts,
                    ToastKind::Error,
                    format!("Could not disconnect {}", connection.bank_name),
                ),
                Err(err) => notify(toasts, ToastKind::Error, format!("Disconnect failed: {}", err)),
            }
        });
    };

    view! {
        <div class="card connected-accounts">
            <h3>"Linked Accounts"</h3>
            <Suspense fallback=move || view! { <p class="muted">"Loading linked accounts..."</p> }>
                {move || connections.get().map(|result| match result {
                    Ok(list) => {
                        let visible: Vec<BankConnection> = list
                            .into_iter()
                            .filter(|c| removed.with(|ids| !ids.contains(&c.id)))
                            .collect();
                        if visible.is_empty() {
                            view! { <p class="muted">"No linked accounts yet."</p> }.into_view()
                        } else {
                            visible
                                .into_iter()
                                .map(|connection| {
                                    let status = connection.connection_status;
                                    let last_sync = connection.last_sync.clone();
                                    let target = connection.clone();
                                    view! {
                                        <div class="account-row">
                                            <div class="account-info">
                                                <p class="account-bank">{connection.bank_name}</p>
                                                <p class="muted">{connection.account_number}</p>
                                                {last_sync.map(|sync| view! {
                                                    <p class="muted">{format!("Last sync: {}", sync)}</p>
                                                })}
                                            </div>
                                            <span class="badge">{status.label()}</span>
                                            <button
                                                class="button button-outline"
                                                on:click=move |_| disconnect(target.clone())
                                            >
                                                "Disconnect"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                    Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_view(),
                })}
            </Suspense>
        </div>
    }
}
