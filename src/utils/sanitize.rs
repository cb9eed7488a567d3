//! File name sanitization for asset side files.

use crate::constants::UNNAMED_FILE_STEM;

/// Turns a display name into a file stem that is safe on every platform.
///
/// The name is lowercased, each run of characters outside `[a-z0-9._-]`
/// becomes a single `-`, and leading/trailing `-` and `.` are trimmed so the
/// result is never hidden and never a relative path component. A name with
/// nothing usable left maps to `unnamed`.
///
/// # Examples
///
/// ```rust
/// use tenant_sync_cli::utils::sanitize_name;
///
/// assert_eq!(sanitize_name("My Conn"), "my-conn");
/// assert_eq!(sanitize_name("../etc/passwd"), "etc-passwd");
/// assert_eq!(sanitize_name("???"), "unnamed");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_unsafe_run = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-') {
            stem.push(c);
            in_unsafe_run = false;
        } else if !in_unsafe_run {
            stem.push('-');
            in_unsafe_run = true;
        }
    }

    let trimmed = stem.trim_matches(|c| c == '-' || c == '.');
    if trimmed.is_empty() {
        UNNAMED_FILE_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces_and_case() {
        assert_eq!(sanitize_name("My Conn"), "my-conn");
        assert_eq!(sanitize_name("  Passwordless   Email  "), "passwordless-email");
    }

    #[test]
    fn test_sanitize_keeps_safe_punctuation() {
        assert_eq!(sanitize_name("email_v2.1-beta"), "email_v2.1-beta");
    }

    #[test]
    fn test_sanitize_path_separators() {
        assert_eq!(sanitize_name("a/b\\c:d"), "a-b-c-d");
        assert_eq!(sanitize_name(".hidden"), "hidden");
        assert_eq!(sanitize_name(".."), UNNAMED_FILE_STEM);
    }

    #[test]
    fn test_sanitize_non_ascii() {
        assert_eq!(sanitize_name("Café Login"), "caf-login");
        assert_eq!(sanitize_name(""), UNNAMED_FILE_STEM);
    }
}
