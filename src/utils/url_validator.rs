//! Field validators for the save workflow.
//!
//! Used through `validator` custom rules on
//! [`crate::domain::entities::NewUrl`]. Messages are field-scoped so clients
//! can correct the offending input.

use std::borrow::Cow;

use url::Url;
use validator::ValidationError;

/// Aliases that would be shadowed by static routes.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Requires a non-empty, absolute URL with both a scheme and a host.
///
/// The URL is only checked, never rewritten: the stored value is exactly
/// what the caller sent, so control characters (which `Url::parse` strips
/// but a `Location` header cannot carry) are rejected.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path?q=1").is_ok());
///
/// assert!(validate_target_url("").is_err());               // required
/// assert!(validate_target_url("not a url").is_err());      // not parseable
/// assert!(validate_target_url("mailto:a@b.c").is_err());   // no host
/// assert!(validate_target_url("https://a.io/\n").is_err()); // control char
/// ```
pub fn validate_target_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("field URL is a required field")));
    }

    let is_absolute = !value.chars().any(char::is_control)
        && Url::parse(value)
            .map(|url| url.has_host() && url.host_str().is_some_and(|host| !host.is_empty()))
            .unwrap_or(false);

    if !is_absolute {
        return Err(
            ValidationError::new("url").with_message(Cow::Borrowed("field URL is not a valid URL"))
        );
    }

    Ok(())
}

/// Rejects caller-supplied aliases that collide with reserved route names.
///
/// An empty alias is valid: it asks for a generated one.
pub fn validate_alias(value: &str) -> Result<(), ValidationError> {
    if RESERVED_ALIASES.contains(&value) {
        return Err(
            ValidationError::new("reserved").with_message(Cow::Borrowed("field Alias is reserved"))
        );
    }

    Ok(())
}
