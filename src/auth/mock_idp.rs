//! Mock identity provider and login-mutation stub.
//!
//! Mirrors the disabled upstream flow: credentials are exchanged for an id
//! token, then `login(id_token)` answers `{success, errors[{code,
//! message}]}`. No real verification happens; the token only has to look
//! like one.

use rand::RngCore;
use serde::Serialize;

use crate::forms::validate;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginError {
    pub code: String,
    pub message: String,
}

/// Shape of the login mutation result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub errors: Vec<LoginError>,
}

/// Exchange credentials for a mock id token. Fails only on malformed
/// input, like the placeholder backend it stands in for.
pub fn sign_in(email: &str, password: &str) -> Result<String, Vec<String>> {
    let mut errors = vec![];
    errors.extend(validate::validate_email(email));
    errors.extend(validate::validate_password(password));
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    Ok(hex::encode(bytes))
}

/// Login-mutation stub: accepts any non-empty token.
pub fn login(id_token: &str) -> LoginResponse {
    if id_token.is_empty() {
        return LoginResponse {
            success: false,
            errors: vec![LoginError {
                code: "INVALID_TOKEN".to_string(),
                message: "Id token is required".to_string(),
            }],
        };
    }
    LoginResponse { success: true, errors: vec![] }
}
