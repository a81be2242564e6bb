//! Login page (stub: no password verification).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::field::{FieldChange, InputField};
use crate::net::auth::{AuthClient, AuthError, SharedAuthClient};
use crate::routes;
use crate::state::forms::{FormFields, LoginForm};

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Record the session for `form` and return the path to navigate to.
fn submit_login(auth: &dyn AuthClient, form: &LoginForm) -> Result<&'static str, AuthError> {
    auth.login(form)?;
    Ok(routes::AFTER_LOGIN)
}

/// Email + password form. A successful submit records the session through
/// the `AuthClient` from context and navigates home. The email of the last
/// session is filled in once the page is live in the browser.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<SharedAuthClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<String>);

    let on_change = Callback::new(move |(name, value): FieldChange| {
        form.update(|f| {
            f.set_field(&name, value);
        });
    });

    Effect::new({
        let auth = auth.clone();
        move || match auth.current_session() {
            Ok(Some(session)) => form.update(|f| {
                if f.email.is_empty() {
                    f.email = session.email;
                }
            }),
            Ok(None) => {}
            Err(e) => log::debug!("no stored session: {e}"),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| submit_login(auth.as_ref(), f)) {
            Ok(target) => {
                error.set(None);
                navigate(target, NavigateOptions::default());
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href=routes::HOME attr:class="auth-card__brand">"Taaru Sénégal"</A>
                <h1 class="auth-card__title">"Connexion"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="Adresse e-mail"
                        name="email"
                        input_type="email"
                        value=Signal::derive(move || form.get().email)
                        on_change=on_change
                        required=true
                    />
                    <InputField
                        label="Mot de passe"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        on_change=on_change
                        required=true
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Button submit=true>"Se connecter"</Button>
                </form>
                <p class="auth-card__switch">
                    "Pas encore de compte ? "
                    <A href=routes::REGISTER>"Inscrivez-vous"</A>
                </p>
            </div>
        </div>
    }
}
