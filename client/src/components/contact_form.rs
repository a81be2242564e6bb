//! Contact form with a timed "message sent" confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is transmitted yet: submitting shows the confirmation for
//! `CONTACT_CONFIRMATION_MS`, then restores an empty form. The timing rules
//! live in `ContactState`; this component only wires them to the timer.

use leptos::prelude::*;

use super::button::Button;
use super::field::{FieldChange, InputField, TextAreaField};
#[cfg(feature = "hydrate")]
use crate::state::forms::CONTACT_CONFIRMATION_MS;
use crate::state::forms::{ContactState, FormFields};

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    let on_change = Callback::new(move |(name, value): FieldChange| {
        state.update(|s| {
            s.form.set_field(&name, value);
        });
    });

    on_cleanup(move || {
        state.try_update_untracked(ContactState::unmount);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = state.try_update(ContactState::submit) else {
            return;
        };
        state.with_untracked(|s| log::info!("contact message from {} <{}> held locally", s.form.name, s.form.email));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(CONTACT_CONFIRMATION_MS)).await;
            if state.try_update(|s| s.timer_elapsed(token)) == Some(true) {
                log::debug!("contact confirmation {token} closed");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        log::debug!("contact confirmation {token} has no timer outside the browser");
    };

    view! {
        <section class="contact-form">
            <Show
                when=move || state.get().notice.visible
                fallback=move || {
                    view! {
                        <form class="contact-form__form" on:submit=on_submit>
                            <InputField
                                label="Nom complet"
                                name="name"
                                value=Signal::derive(move || state.get().form.name)
                                on_change=on_change
                                required=true
                            />
                            <InputField
                                label="Adresse e-mail"
                                name="email"
                                input_type="email"
                                value=Signal::derive(move || state.get().form.email)
                                on_change=on_change
                                required=true
                                placeholder="vous@exemple.sn"
                            />
                            <TextAreaField
                                label="Votre message"
                                name="message"
                                value=Signal::derive(move || state.get().form.message)
                                on_change=on_change
                                required=true
                            />
                            <Button submit=true>"Envoyer"</Button>
                        </form>
                    }
                }
            >
                <div class="contact-form__sent" role="status">
                    <h3>"Merci !"</h3>
                    <p>"Votre message a bien été envoyé. Nous vous répondrons rapidement."</p>
                </div>
            </Show>
        </section>
    }
}
