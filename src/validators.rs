//! Booking-form input validation and sanitisation.
//!
//! Mirrors the checks the booking backend applies so obviously bad
//! input is rejected before a request leaves the client. Each validator
//! returns the sanitised value on success and a user-facing message on
//! failure.

use regex::Regex;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,100}$").expect("NAME_REGEX is a valid regex pattern")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\d\s\-()]{9,20}$").expect("PHONE_REGEX is a valid regex pattern")
});

/// Script payloads that survive HTML escaping (URI schemes, inline
/// event handlers).
static DANGEROUS_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)javascript:|vbscript:|data:|on\w+\s*=")
        .expect("DANGEROUS_CONTENT is a valid regex pattern")
});

/// Terms that mark a submission as spam regardless of other checks.
const SPAM_KEYWORDS: &[&str] = &[
    "viagra",
    "casino",
    "lottery",
    "winner",
    "congratulations",
    "click here",
    "free money",
    "make money",
    "investment",
    "crypto",
    "bitcoin",
    "trading",
    "forex",
];

/// Maximum length kept for any free-text field after sanitisation.
const MAX_FIELD_LENGTH: usize = 500;

/// Trim, escape HTML metacharacters, drop control characters, strip
/// script payloads, and truncate. Applied to every free-text field
/// before validation.
pub fn sanitize(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c if (c as u32) < 32 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => escaped.push(c),
        }
    }
    let stripped = DANGEROUS_CONTENT.replace_all(&escaped, "");
    stripped.chars().take(MAX_FIELD_LENGTH).collect()
}

/// Whether `text` trips the spam keyword screen.
pub fn is_spam(text: &str) -> bool {
    let lower = text.to_lowercase();
    SPAM_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Validate a visitor's full name: 2-100 letters (Spanish accents
/// allowed) and spaces.
pub fn validate_name(name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    let clean = sanitize(name);
    if !NAME_REGEX.is_match(&clean) {
        return Err("Name must be 2-100 characters and contain only letters".to_string());
    }
    if is_spam(&clean) {
        return Err("Name is not valid".to_string());
    }
    Ok(clean)
}

/// Validate an email address. Returns it trimmed and lowercased.
pub fn validate_email(email: &str) -> Result<String, String> {
    let clean = email.trim().to_lowercase();
    if clean.is_empty() {
        return Err("Email is required".to_string());
    }
    if clean.len() > 254 || !EMAIL_REGEX.is_match(&clean) {
        return Err("Email address is not valid".to_string());
    }
    Ok(clean)
}

/// Validate a phone number: 9-20 digits with optional +, spaces,
/// dashes, and parentheses.
pub fn validate_phone(phone: &str) -> Result<String, String> {
    let clean = phone.trim().to_string();
    if clean.is_empty() {
        return Err("Phone number is required".to_string());
    }
    if !PHONE_REGEX.is_match(&clean) {
        return Err("Phone number is not valid".to_string());
    }
    Ok(clean)
}

/// Validate a free-text message (notes, testimonial body).
pub fn validate_message(message: &str) -> Result<String, String> {
    let clean = sanitize(message);
    if clean.is_empty() {
        return Err("Message is required".to_string());
    }
    if is_spam(&clean) {
        return Err("Message was flagged as spam".to_string());
    }
    Ok(clean)
}
