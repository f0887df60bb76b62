//! Built-in fallback list.
//!
//! Substituted for the external list file when it cannot be read, so the
//! validator is never left without data.

/// Well-known weak passwords compiled into the binary.
///
/// All entries are lowercase and non-empty. This list is intentionally
/// small; it under-protects compared to the external file but keeps the
/// check working through an infrastructure fault.
pub const FALLBACK_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345678",
    "qwerty",
    "abc123",
    "password1",
    "111111",
    "1234567",
    "iloveyou",
    "admin",
    "welcome",
    "monkey",
    "login",
    "letmein",
    "dragon",
    "princess",
    "sunshine",
    "master",
    "football",
];
