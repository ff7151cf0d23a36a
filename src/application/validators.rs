/// Minimal syntactic check: non-blank and contains an `@`.
///
/// Deliverability is not checked; the waitlist only needs something that
/// looks like an address.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Canonical form used for storage and the uniqueness constraint.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Missing or empty names are stored as NULL; anything else is kept as sent.
pub fn normalize_name(name: Option<&str>) -> Option<String> {
    name.filter(|n| !n.is_empty()).map(str::to_string)
}
