//! Account constants and validation for the local identity provider.

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Minimum password length enforced at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum display name length in characters.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Validate a username: length-bounded, ASCII letters, digits, `_` or `-`.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(
            "Username may only contain letters, digits, underscores and hyphens".to_string(),
        );
    }
    Ok(())
}

/// Resolve the display name stored for a new account.
///
/// Blank input falls back to the username.
pub fn resolve_display_name(display_name: Option<&str>, username: &str) -> Result<String, String> {
    match display_name.map(str::trim) {
        Some(name) if !name.is_empty() => {
            if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
                return Err(format!(
                    "Display name exceeds maximum length of {MAX_DISPLAY_NAME_LENGTH} characters"
                ));
            }
            Ok(name.to_string())
        }
        _ => Ok(username.to_string()),
    }
}
