use base64::{engine::general_purpose::STANDARD, Engine as _};
use showcase_backend::{
    auth::basic::{BasicCredentials, CredentialGate},
    errors::AuthError,
};

fn header(raw: &str) -> String {
    format!("Basic {}", STANDARD.encode(raw))
}

#[test]
fn parses_well_formed_header() {
    let creds = BasicCredentials::from_header(&header("admin:pa:ss")).expect("should parse");

    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password.as_str(), "pa:ss");
}

#[test]
fn scheme_is_case_insensitive() {
    let value = format!("basic {}", STANDARD.encode("admin:secret"));
    assert!(BasicCredentials::from_header(&value).is_some());
}

#[test]
fn rejects_incomplete_or_foreign_headers() {
    assert!(BasicCredentials::from_header(&header("admin:")).is_none());
    assert!(BasicCredentials::from_header(&header(":secret")).is_none());
    assert!(BasicCredentials::from_header(&header("no-colon")).is_none());
    assert!(BasicCredentials::from_header("Basic !!!not-base64").is_none());
    assert!(BasicCredentials::from_header("Bearer abc.def.ghi").is_none());
    assert!(BasicCredentials::from_header("").is_none());
}

#[test]
fn gate_distinguishes_missing_from_wrong() {
    let gate = CredentialGate::new("admin", "secret");

    assert_eq!(gate.authenticate(None), Err(AuthError::MissingCredentials));

    let wrong = BasicCredentials::from_header(&header("admin:nope")).unwrap();
    assert_eq!(gate.authenticate(Some(&wrong)), Err(AuthError::WrongCredentials));

    let wrong_user = BasicCredentials::from_header(&header("root:secret")).unwrap();
    assert_eq!(gate.authenticate(Some(&wrong_user)), Err(AuthError::WrongCredentials));

    let right = BasicCredentials::from_header(&header("admin:secret")).unwrap();
    assert_eq!(gate.authenticate(Some(&right)), Ok(()));
}

#[test]
fn auth_errors_render_as_plain_messages() {
    assert_eq!(AuthError::MissingCredentials.to_string(), "Authentication required");
    assert_eq!(AuthError::WrongCredentials.to_string(), "Invalid credentials");
}
