//! Registration page (stub: validated locally, echoed to the log).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::Button;
use crate::components::field::{FieldChange, InputField, SelectField};
use crate::net::auth::{AuthError, SharedAuthClient};
use crate::routes;
use crate::state::forms::{FormFields, ROLES, RegisterForm};
use crate::util::dialog;

/// Outcome of the last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum SubmitState {
    #[default]
    Idle,
    Mismatch,
    Failed(String),
    Accepted(String),
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<SharedAuthClient>();
    let form = RwSignal::new(RegisterForm::default());
    let status = RwSignal::new(SubmitState::Idle);

    let on_change = Callback::new(move |(name, value): FieldChange| {
        form.update(|f| {
            f.set_field(&name, value);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| auth.register(f)) {
            Ok(registration) => status.set(SubmitState::Accepted(registration.full_name)),
            Err(AuthError::PasswordMismatch) => {
                status.set(SubmitState::Mismatch);
                dialog::alert(&AuthError::PasswordMismatch.to_string());
            }
            Err(e) => status.set(SubmitState::Failed(e.to_string())),
        }
    };

    let mismatch = Signal::derive(move || status.get() == SubmitState::Mismatch);

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <A href=routes::HOME attr:class="auth-card__brand">"Taaru Sénégal"</A>
                <h1 class="auth-card__title">"Créer un compte"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="Nom complet"
                        name="fullName"
                        value=Signal::derive(move || form.get().full_name)
                        on_change=on_change
                        required=true
                    />
                    <InputField
                        label="Adresse e-mail"
                        name="email"
                        input_type="email"
                        value=Signal::derive(move || form.get().email)
                        on_change=on_change
                        required=true
                    />
                    <SelectField
                        label="Je suis"
                        name="role"
                        options=ROLES
                        value=Signal::derive(move || form.get().role)
                        on_change=on_change
                    />
                    <InputField
                        label="Mot de passe"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        on_change=on_change
                        required=true
                    />
                    <InputField
                        label="Confirmer le mot de passe"
                        name="confirmPassword"
                        input_type="password"
                        value=Signal::derive(move || form.get().confirm_password)
                        on_change=on_change
                        required=true
                        invalid=mismatch
                    />
                    <Show when=move || mismatch.get()>
                        <p class="auth-form__error" role="alert">{AuthError::PasswordMismatch.to_string()}</p>
                    </Show>
                    {move || match status.get() {
                        SubmitState::Failed(message) => {
                            Some(view! { <p class="auth-form__error" role="alert">{message}</p> }.into_any())
                        }
                        SubmitState::Accepted(name) => {
                            Some(
                                view! {
                                    <p class="auth-form__success" role="status">
                                        "Merci " {name} ", votre demande d'inscription a été enregistrée."
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        SubmitState::Idle | SubmitState::Mismatch => None,
                    }}
                    <Button submit=true>"S'inscrire"</Button>
                </form>
                <p class="auth-card__switch">
                    "Déjà inscrit ? "
                    <A href=routes::LOGIN>"Connectez-vous"</A>
                </p>
            </div>
        </div>
    }
}
