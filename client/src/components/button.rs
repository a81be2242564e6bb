//! Styled button primitive.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Visual variant shared by `Button` and button-styled links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Secondary => "btn btn--secondary",
            Self::Ghost => "btn btn--ghost",
        }
    }
}

/// A `<button>`; `submit` makes it the form's submit control.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=variant.class()
            type=if submit { "submit" } else { "button" }
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
