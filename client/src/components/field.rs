//! Labeled form controls.
//!
//! DESIGN
//! ======
//! Controls are stateless: the owning form passes the current value as a
//! signal and receives `(name, value)` on every change, then patches its
//! record through `FormFields::set_field`.

use leptos::prelude::*;

/// Change callback payload: the control's `name` and its new value.
pub type FieldChange = (String, String);

/// Labeled `<input>`.
#[component]
pub fn InputField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<FieldChange>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] invalid: MaybeProp<bool>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let field_name = name.clone();
    view! {
        <div class="form-field" class:form-field--invalid=move || invalid.get().unwrap_or(false)>
            <label class="form-field__label" for=id.clone()>{label}</label>
            <input
                id=id
                class="form-field__input"
                type=input_type
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((field_name.clone(), event_target_value(&ev)))
            />
        </div>
    }
}

/// Labeled multi-line `<textarea>`.
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<FieldChange>,
    #[prop(optional)] required: bool,
    #[prop(default = 5)] rows: u32,
) -> impl IntoView {
    let id = format!("field-{name}");
    let field_name = name.clone();
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id.clone()>{label}</label>
            <textarea
                id=id
                class="form-field__input form-field__input--multiline"
                name=name
                rows=rows.to_string()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((field_name.clone(), event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

/// Labeled `<select>` over a fixed option list.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let field_name = name.clone();
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id.clone()>{label}</label>
            <select
                id=id
                class="form-field__input"
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run((field_name.clone(), event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
