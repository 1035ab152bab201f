//! Client information form: business name plus one or more accounts.

use leptos::*;

use super::BrowserWorkflow;
use crate::workflow::ClientInfoDraft;

#[component]
pub fn ClientInfoForm(workflow: RwSignal<BrowserWorkflow>) -> impl IntoView {
    let initial = workflow.with_untracked(|w| {
        w.client_info()
            .map(ClientInfoDraft::from_info)
            .unwrap_or_default()
    });
    let draft = create_rw_signal(initial);
    let (touched, set_touched) = create_signal(false);
    let submitting = move || workflow.with(|w| w.is_submitting());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);
        match draft.with_untracked(|d| d.submit()) {
            Ok(info) => {
                log::info!("📝 Client information provided for {}", info.name());
                workflow.update(|w| {
                    w.provide_client_info(info);
                });
            }
            Err(err) => log::warn!("⚠️  {}", err),
        }
    };

    let name_error = move || {
        touched
            .get()
            .then(|| draft.with(|d| d.name_error()))
            .flatten()
            .map(|err| view! { <p class="field-error">{err.to_string()}</p> })
    };
    let accounts_error = move || {
        touched
            .get()
            .then(|| draft.with(|d| d.accounts_error()))
            .flatten()
            .map(|err| view! { <p class="field-error">{err.to_string()}</p> })
    };

    view! {
        <form class="card client-info-form" on:submit=on_submit>
            <h3>"🏢 Client Information"</h3>

            <label class="form-field">
                <span class="form-label">"Business Name"</span>
                <input
                    type="text"
                    placeholder="Enter the business name"
                    prop:value=move || draft.with(|d| d.name().to_string())
                    disabled=submitting
                    on:input=move |ev| draft.update(|d| d.set_name(event_target_value(&ev)))
                />
                {name_error}
            </label>

            <div class="form-field">
                <div class="form-field-header">
                    <span class="form-label">"Account Numbers"</span>
                    <button
                        type="button"
                        class="button button-ghost"
                        disabled=submitting
                        on:click=move |_| draft.update(|d| d.add_slot())
                    >
                        "+ Add Account"
                    </button>
                </div>
                <For
                    each=move || 0..draft.with(|d| d.slots().len())
                    key=|index| *index
                    children=move |index| {
                        view! {
                            <div class="account-slot">
                                <input
                                    type="text"
                                    placeholder=format!("Account number {}", index + 1)
                                    prop:value=move || {
                                        draft.with(|d| d.slots().get(index).cloned().unwrap_or_default())
                                    }
                                    disabled=submitting
                                    on:input=move |ev| {
                                        draft.update(|d| d.set_slot(index, event_target_value(&ev)))
                                    }
                                />
                                <Show
                                    when=move || draft.with(|d| d.can_remove_slot())
                                    fallback=|| view! { }
                                >
                                    <button
                                        type="button"
                                        class="button button-ghost"
                                        aria-label="Remove account"
                                        disabled=submitting
                                        on:click=move |_| {
                                            draft.update(|d| {
                                                d.remove_slot(index);
                                            })
                                        }
                                    >
                                        "✕"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                />
                {accounts_error}
            </div>

            <button
                type="submit"
                class="button button-primary"
                disabled=move || submitting() || !draft.with(|d| d.is_valid())
            >
                {move || if submitting() { "Processing..." } else { "Continue to Upload" }}
            </button>
        </form>
    }
}
