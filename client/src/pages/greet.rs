//! Greeting form page — the submit → validate → request → status flow.
//!
//! DESIGN
//! ======
//! The component is thin glue over pure helpers (`validate_submission`,
//! `outcome_status`) so the interaction logic stays unit-testable without a
//! DOM. Default form navigation is always suppressed, and every submission
//! attempt produces exactly one status message.

use leptos::prelude::*;

use crate::net::types::GreetRequest;
use crate::status::StatusMessage;

#[cfg(test)]
#[path = "greet_test.rs"]
mod greet_test;

const NAME_REQUIRED_MESSAGE: &str = "Lütfen adınızı girin.";

/// Trim both fields and require a non-empty name. Surname is optional.
fn validate_submission(name: &str, surname: &str) -> Result<GreetRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED_MESSAGE);
    }
    Ok(GreetRequest { name: name.to_owned(), surname: surname.trim().to_owned() })
}

/// Map the network outcome to the status message shown to the user.
#[cfg(any(test, feature = "hydrate"))]
fn outcome_status(outcome: Result<String, String>) -> StatusMessage {
    match outcome {
        Ok(message) => StatusMessage::success(message),
        Err(detail) => StatusMessage::error(format!("Hata: {detail}")),
    }
}

#[component]
pub fn GreetPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let status = RwSignal::new(None::<StatusMessage>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_submission(&name.get(), &surname.get()) {
            Ok(request) => request,
            Err(message) => {
                status.set(Some(StatusMessage::error(message)));
                return;
            }
        };

        // Overlapping submissions are allowed to race; the last response to
        // resolve owns the status region.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_greeting(&request).await;
            status.set(Some(outcome_status(outcome)));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="greet-page">
            <div class="greet-card">
                <h1>"Selam"</h1>
                <p class="greet-card__subtitle">"Adınızı yazın, selamlayalım."</p>
                <form class="greet-form" on:submit=on_submit>
                    <input
                        class="greet-input"
                        type="text"
                        name="name"
                        placeholder="Adınız"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="greet-input"
                        type="text"
                        name="surname"
                        placeholder="Soyadınız"
                        prop:value=move || surname.get()
                        on:input=move |ev| surname.set(event_target_value(&ev))
                    />
                    <button class="greet-button" type="submit">
                        "Gönder"
                    </button>
                </form>
                <Show when=move || status.get().is_some()>
                    <p
                        class="greet-message"
                        style=move || status.get().map(|s| s.style()).unwrap_or_default()
                    >
                        {move || status.get().map(|s| s.text).unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
