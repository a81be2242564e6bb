use super::*;
use crate::net::auth::LocalAuthClient;
use crate::net::storage::MemoryStore;

fn form(email: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: "pw".to_owned() }
}

#[test]
fn successful_login_navigates_home() {
    let client = LocalAuthClient::new(MemoryStore::new());
    assert_eq!(submit_login(&client, &form("awa@taaru.sn")), Ok("/"));
}

#[test]
fn successful_login_stores_session_before_redirect() {
    let client = LocalAuthClient::new(MemoryStore::new());
    submit_login(&client, &form("awa@taaru.sn")).unwrap();
    let session = client.current_session().unwrap().unwrap();
    assert_eq!(session.email, "awa@taaru.sn");
    assert_eq!(session.role, "Client");
}

#[test]
fn failed_login_has_no_redirect() {
    let client = LocalAuthClient::new(MemoryStore::new());
    assert_eq!(submit_login(&client, &form("  ")), Err(AuthError::MissingEmail));
    assert_eq!(client.current_session().unwrap(), None);
}
