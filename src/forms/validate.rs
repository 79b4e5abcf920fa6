//! Synchronous field validators. Each returns `None` when the value is
//! acceptable, or a user-facing message.

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 100;
const EMAIL_MAX_LENGTH: usize = 254;

/// Validate a person-name field: required, 2-100 chars after trimming,
/// letters, spaces, hyphens and apostrophes only, and no two special
/// characters in a row.
pub fn validate_name(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LENGTH {
        return Some(format!("{field_name} must be at least {NAME_MIN_LENGTH} characters"));
    }
    if len > NAME_MAX_LENGTH {
        return Some(format!("{field_name} must be at most {NAME_MAX_LENGTH} characters"));
    }

    let mut prev_special = false;
    for c in trimmed.chars() {
        let special = c.is_whitespace() || c == '-' || c == '\'';
        if !special && !c.is_ascii_alphabetic() {
            return Some(format!(
                "{field_name} may only contain letters, spaces, hyphens, and apostrophes"
            ));
        }
        // "Jo--hn" and "O''Brien" are typos, not names.
        if special && prev_special {
            return Some(format!(
                "{field_name} must not contain consecutive spaces, hyphens, or apostrophes"
            ));
        }
        prev_special = special;
    }
    None
}

/// Validate an email: required, structural syntax, max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > EMAIL_MAX_LENGTH {
        return Some(format!("Email must be at most {EMAIL_MAX_LENGTH} characters"));
    }
    let invalid = || Some("Email must be a valid address".to_string());
    let Some((local, domain)) = trimmed.split_once('@') else {
        return invalid();
    };
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || trimmed.contains(char::is_whitespace)
    {
        return invalid();
    }
    None
}

/// Validate a password: required only. The mock identity provider accepts
/// any non-empty credential.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_plain_hyphenated_and_apostrophized() {
        assert_eq!(validate_name("Jo-hn", "First name"), None);
        assert_eq!(validate_name("O'Brien", "Last name"), None);
        assert_eq!(validate_name("Mary Jane", "First name"), None);
    }

    #[test]
    fn name_rejects_consecutive_special_characters() {
        assert!(validate_name("Jo--hn", "First name").is_some());
        assert!(validate_name("O''Brien", "Last name").is_some());
        assert!(validate_name("Mary  Jane", "First name").is_some());
        assert!(validate_name("Anne -Marie", "First name").is_some());
    }

    #[test]
    fn name_rejects_empty_and_whitespace_only() {
        assert_eq!(validate_name("", "First name"), Some("First name is required".to_string()));
        assert!(validate_name("   ", "First name").is_some());
    }

    #[test]
    fn name_enforces_length_bounds() {
        assert!(validate_name("J", "First name").is_some());
        assert_eq!(validate_name("Jo", "First name"), None);
        let long = "a".repeat(101);
        assert!(validate_name(&long, "First name").is_some());
        let max = "a".repeat(100);
        assert_eq!(validate_name(&max, "First name"), None);
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert!(validate_name("John3", "First name").is_some());
        assert!(validate_name("John_Doe", "First name").is_some());
    }

    #[test]
    fn email_accepts_ordinary_addresses() {
        assert_eq!(validate_email("alice.johnson@example.com"), None);
        assert_eq!(validate_email("  a@x.com  "), None);
    }

    #[test]
    fn email_rejects_structural_garbage() {
        assert!(validate_email("").is_some());
        assert!(validate_email("no-at-sign.com").is_some());
        assert!(validate_email("a@nodot").is_some());
        assert!(validate_email("@x.com").is_some());
        assert!(validate_email("a@").is_some());
        assert!(validate_email("a@@x.com").is_some());
        assert!(validate_email("a b@x.com").is_some());
        assert!(validate_email("a@.com").is_some());
        assert!(validate_email("a@x.com.").is_some());
    }

    #[test]
    fn email_enforces_max_length() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&long).is_some());
    }

    #[test]
    fn password_is_only_required() {
        assert!(validate_password("").is_some());
        assert_eq!(validate_password("x"), None);
    }
}
