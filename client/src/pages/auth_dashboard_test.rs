use super::*;

#[test]
fn validate_credentials_trims_username() {
    let credentials = validate_credentials("  alice ", "s3cret").unwrap();
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "s3cret");
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let credentials = validate_credentials("alice", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter your username."));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("alice", ""), Err("Enter your password."));
}
