use super::*;
use crate::net::storage::MemoryStore;

fn stored_session(client: &LocalAuthClient<MemoryStore>) -> Option<Session> {
    client.current_session().unwrap()
}

fn login_form(email: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: "anything".to_owned() }
}

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        full_name: "Awa Diop".to_owned(),
        email: "awa@taaru.sn".to_owned(),
        role: "Artisan".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_persists_email_with_client_role() {
    let client = LocalAuthClient::new(MemoryStore::new());
    let session = client.login(&login_form("x@y.com")).unwrap();
    assert_eq!(session, Session { email: "x@y.com".to_owned(), role: "Client".to_owned() });

    let raw = client.store.get(SESSION_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, serde_json::json!({ "email": "x@y.com", "role": "Client" }));
}

#[test]
fn login_trims_email() {
    let client = LocalAuthClient::new(MemoryStore::new());
    let session = client.login(&login_form("  x@y.com ")).unwrap();
    assert_eq!(session.email, "x@y.com");
}

#[test]
fn login_does_not_check_password() {
    let client = LocalAuthClient::new(MemoryStore::new());
    let form = LoginForm { email: "x@y.com".to_owned(), password: String::new() };
    assert!(client.login(&form).is_ok());
}

#[test]
fn login_with_blank_email_is_rejected_and_not_stored() {
    let client = LocalAuthClient::new(MemoryStore::new());
    assert_eq!(client.login(&login_form("   ")), Err(AuthError::MissingEmail));
    assert_eq!(stored_session(&client), None);
}

#[test]
fn later_login_replaces_stored_session() {
    let client = LocalAuthClient::new(MemoryStore::new());
    client.login(&login_form("first@y.com")).unwrap();
    client.login(&login_form("second@y.com")).unwrap();
    let session = stored_session(&client).unwrap();
    assert_eq!(session.email, "second@y.com");
}

#[test]
fn corrupt_stored_session_reports_storage_error() {
    let client = LocalAuthClient::new(MemoryStore::new());
    client.store.set(SESSION_KEY, "not json").unwrap();
    assert!(matches!(client.current_session(), Err(AuthError::Storage(StorageError::Json(_)))));
}

#[test]
fn login_without_storage_reports_storage_error() {
    let client = LocalAuthClient::new(crate::net::storage::BrowserStorage);
    let err = client.login(&login_form("x@y.com")).unwrap_err();
    assert_eq!(err, AuthError::Storage(StorageError::Unavailable));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_mismatched_passwords_is_blocked() {
    let client = LocalAuthClient::new(MemoryStore::new());
    assert_eq!(client.register(&register_form("a", "b")), Err(AuthError::PasswordMismatch));
}

#[test]
fn register_matching_passwords_proceeds() {
    let client = LocalAuthClient::new(MemoryStore::new());
    let registration = client.register(&register_form("a", "a")).unwrap();
    assert_eq!(registration.full_name, "Awa Diop");
    assert_eq!(registration.email, "awa@taaru.sn");
    assert_eq!(registration.role, "Artisan");
}

#[test]
fn register_does_not_persist_anything() {
    let client = LocalAuthClient::new(MemoryStore::new());
    client.register(&register_form("a", "a")).unwrap();
    assert_eq!(client.store.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn registration_serializes_without_passwords() {
    let client = LocalAuthClient::new(MemoryStore::new());
    let registration = client.register(&register_form("secret", "secret")).unwrap();
    let json = serde_json::to_value(&registration).unwrap();
    assert_eq!(json, serde_json::json!({ "fullName": "Awa Diop", "email": "awa@taaru.sn", "role": "Artisan" }));
}

#[test]
fn mismatch_message_is_user_facing_french() {
    assert_eq!(AuthError::PasswordMismatch.to_string(), "Les mots de passe ne correspondent pas.");
}
