//! Bank connection dialog.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::notifications::{notify, ToastKind, ToastQueue};
use crate::services::{DataSource, TreasuryService};
use crate::types::{Bank, ValidationError};
use crate::workflow::{BankConnectionForm, BankField, ConnectOutcome};

fn credential_input(
    form: RwSignal<BankConnectionForm>,
    field: BankField,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| f.fields().value(field).to_string())
                disabled=move || form.with(|f| f.is_connecting())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Modal collecting a bank and optional credentials.
///
/// `refresh` is bumped after every successful link so account lists can
/// reload.
#[component]
pub fn BankConnectionModal(
    form: RwSignal<BankConnectionForm>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let service = store_value(expect_context::<TreasuryService>());
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = store_value(use_navigate());
    let field_error = create_rw_signal(None::<ValidationError>);

    let connecting = move || form.with(|f| f.is_connecting());

    let close = move || {
        form.update(|f| {
            if f.close() {
                field_error.set(None);
            }
        })
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(|f| f.begin_connect()) {
            Some(Ok(Some(request))) => request,
            Some(Err(err)) => {
                field_error.set(Some(err));
                return;
            }
            _ => return,
        };
        field_error.set(None);

        spawn_local(async move {
            let result = service.get_value().connect_bank(&request).await;
            let Some(outcome) = form.try_update(|f| f.finish_connect(result)) else {
                return;
            };
            match &outcome {
                ConnectOutcome::Linked(_) => {
                    notify(toasts, ToastKind::Success, outcome.notification());
                    refresh.update(|count| *count += 1);
                    if let Some(target) = outcome.navigation_target() {
                        navigate.with_value(|navigate| navigate(&target, NavigateOptions::default()));
                    }
                }
                ConnectOutcome::Failed(_) => {
                    notify(toasts, ToastKind::Error, outcome.notification())
                }
            }
        });
    };

    let error_for = move |matches: fn(&ValidationError) -> bool| {
        move || {
            field_error
                .get()
                .filter(|err| matches(err))
                .map(|err| view! { <p class="field-error">{err.to_string()}</p> })
        }
    };

    view! {
        <Show when=move || form.with(|f| f.is_open()) fallback=|| view! { }>
            <div class="modal-overlay" on:click=move |_| close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h3>"🏦 Connect Bank Account"</h3>
                        <p class="muted">
                            "Securely connect your business bank account for automatic transaction import. Your credentials are encrypted and never stored permanently."
                        </p>
                    </div>
                    <form class="modal-body" on:submit=on_submit>
                        <label class="form-field">
                            <span class="form-label">"Bank Name"</span>
                            <select
                                disabled=connecting
                                prop:value=move || {
                                    form.with(|f| f.fields().bank.map(|bank| bank.value()).unwrap_or(""))
                                }
                                on:change=move |ev| {
                                    form.update(|f| f.select_bank(Bank::from_value(&event_target_value(&ev))))
                                }
                            >
                                <option value="" disabled=true>"Select your bank"</option>
                                {Bank::ALL
                                    .iter()
                                    .map(|bank| view! { <option value=bank.value()>{bank.label()}</option> })
                                    .collect_view()}
                            </select>
                            {error_for(|err| matches!(err, ValidationError::MissingBank))}
                        </label>

                        {credential_input(form, BankField::AccountNumber, "Account Number", "Enter your account number", "text")}
                        {error_for(|err| matches!(err, ValidationError::MissingBankAccountNumber))}
                        {credential_input(form, BankField::Username, "Online Banking Username (Optional)", "Your online banking username", "text")}
                        {credential_input(form, BankField::AccountId, "Account ID (Optional)", "Bank-specific account identifier", "text")}
                        {credential_input(form, BankField::ApiKey, "API Key (Optional)", "For direct API integration", "password")}

                        {move || form.with(|f| f.error().map(str::to_string)).map(|message| view! {
                            <div class="alert alert-error" role="alert">{message}</div>
                        })}

                        <div class="modal-footer">
                            <button
                                type="button"
                                class="button button-outline"
                                disabled=connecting
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="button button-primary" disabled=connecting>
                                {move || if connecting() { "Connecting..." } else { "Connect Account" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
