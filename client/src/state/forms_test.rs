use super::*;

// =============================================================
// Field patching
// =============================================================

#[test]
fn contact_set_field_patches_only_named_field() {
    let mut form = ContactForm { name: "Awa".into(), email: "awa@example.sn".into(), message: "Bonjour".into() };
    assert!(form.set_field("email", "awa@taaru.sn".into()));
    assert_eq!(form.email, "awa@taaru.sn");
    assert_eq!(form.name, "Awa");
    assert_eq!(form.message, "Bonjour");
}

#[test]
fn unknown_field_name_leaves_record_untouched() {
    let mut form = ContactForm::default();
    assert!(!form.set_field("phone", "77 000 00 00".into()));
    assert_eq!(form, ContactForm::default());
}

#[test]
fn login_set_field_patches_email_and_password() {
    let mut form = LoginForm::default();
    form.set_field("email", "x@y.com".into());
    form.set_field("password", "secret".into());
    assert_eq!(form, LoginForm { email: "x@y.com".into(), password: "secret".into() });
}

#[test]
fn register_uses_camel_case_input_names() {
    let mut form = RegisterForm::default();
    assert!(form.set_field("fullName", "Awa Diop".into()));
    assert!(form.set_field("confirmPassword", "a".into()));
    assert!(!form.set_field("full_name", "ignored".into()));
    assert_eq!(form.full_name, "Awa Diop");
    assert_eq!(form.confirm_password, "a");
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_default_role_is_client() {
    assert_eq!(RegisterForm::default().role, "Client");
}

#[test]
fn role_with_apostrophe_is_kept_verbatim() {
    let mut form = RegisterForm::default();
    form.set_field("role", "Vendeur d'Accessoires".into());
    assert_eq!(form.role, ROLES[3]);
}

#[test]
fn passwords_match_compares_exactly() {
    let mut form = RegisterForm::default();
    form.set_field("password", "a".into());
    form.set_field("confirmPassword", "b".into());
    assert!(!form.passwords_match());
    form.set_field("confirmPassword", "a".into());
    assert!(form.passwords_match());
}

// =============================================================
// Sent notice
// =============================================================

#[test]
fn confirmation_window_is_four_seconds() {
    assert_eq!(CONTACT_CONFIRMATION_MS, 4000);
}

#[test]
fn show_makes_notice_visible_immediately() {
    let mut notice = SentNotice::default();
    assert!(!notice.visible);
    notice.show();
    assert!(notice.visible);
}

#[test]
fn expire_with_current_token_hides_notice() {
    let mut notice = SentNotice::default();
    let token = notice.show();
    assert!(notice.expire(token));
    assert!(!notice.visible);
}

#[test]
fn stale_token_does_not_cut_new_window_short() {
    let mut notice = SentNotice::default();
    let first = notice.show();
    let second = notice.show();
    assert!(!notice.expire(first));
    assert!(notice.visible);
    assert!(notice.expire(second));
    assert!(!notice.visible);
}

// =============================================================
// Contact section
// =============================================================

fn filled_contact() -> ContactState {
    let mut state = ContactState::default();
    state.form.set_field("name", "Awa".into());
    state.form.set_field("email", "awa@taaru.sn".into());
    state.form.set_field("message", "Bonjour".into());
    state
}

#[test]
fn submit_shows_confirmation_and_keeps_fields_during_window() {
    let mut state = filled_contact();
    state.submit();
    assert!(state.notice.visible);
    assert_eq!(state.form.name, "Awa");
}

#[test]
fn elapsed_timer_hides_confirmation_and_resets_fields() {
    let mut state = filled_contact();
    let token = state.submit();
    assert!(state.timer_elapsed(token));
    assert!(!state.notice.visible);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn resubmit_restarts_the_window() {
    let mut state = filled_contact();
    let first = state.submit();
    let second = state.submit();
    assert!(!state.timer_elapsed(first));
    assert!(state.notice.visible);
    assert_eq!(state.form.email, "awa@taaru.sn");
    assert!(state.timer_elapsed(second));
    assert!(!state.notice.visible);
}

#[test]
fn timer_after_unmount_changes_nothing() {
    let mut state = filled_contact();
    let token = state.submit();
    state.unmount();
    assert!(!state.timer_elapsed(token));
    assert!(state.notice.visible);
    assert_eq!(state.form.message, "Bonjour");
}

#[test]
fn second_firing_of_same_timer_is_ignored() {
    let mut state = filled_contact();
    let token = state.submit();
    assert!(state.timer_elapsed(token));
    state.form.set_field("name", "Moussa".into());
    assert!(!state.timer_elapsed(token));
    assert_eq!(state.form.name, "Moussa");
}
