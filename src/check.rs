//! Registration-flow check - maps a blocklist hit to a user-facing rejection.

use crate::blocklist::is_blocked;
use secrecy::{ExposeSecret, SecretString};

/// Checks a candidate password against the blocklist.
///
/// # Returns
/// - `Some(reason)` if the candidate must be rejected
/// - `None` if the candidate is acceptable with respect to this check
pub fn rejection(password: &SecretString) -> Option<String> {
    if is_blocked(password.expose_secret()) {
        return Some("Password is on the common-password blocklist".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_rejection_blocked_password() {
        crate::blocklist::reset_blocklist_for_testing();

        let temp_file = setup_with_tempfile(&["password", "123456", "qwerty"]);
        crate::blocklist::init_blocklist_from_path(temp_file.path());

        let pwd = SecretString::new("password".to_string().into());
        let result = rejection(&pwd);
        assert!(matches!(result, Some(reason) if reason.contains("blocklist")));
    }

    #[test]
    #[serial]
    fn test_rejection_acceptable_password() {
        crate::blocklist::reset_blocklist_for_testing();

        let temp_file = setup_with_tempfile(&["password", "123456", "qwerty"]);
        crate::blocklist::init_blocklist_from_path(temp_file.path());

        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        assert_eq!(rejection(&pwd), None);
    }

    #[test]
    #[serial]
    fn test_rejection_case_insensitive() {
        crate::blocklist::reset_blocklist_for_testing();

        let temp_file = setup_with_tempfile(&["qwerty"]);
        crate::blocklist::init_blocklist_from_path(temp_file.path());

        let pwd = SecretString::new("QwErTy".to_string().into());
        assert!(rejection(&pwd).is_some());
    }
}
