//! Input predicates for user, job, and upload fields.
//!
//! All of these are pure functions over `&str`: no allocation beyond the
//! compiled patterns, no side effects, total over their input.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static FULL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static SALARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[0-9,]+( - [0-9,]+)? per year$").unwrap());

static APPLY_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).unwrap());

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

pub fn is_valid_full_name(full_name: &str) -> bool {
    FULL_NAME_RE.is_match(full_name) && !full_name.trim().is_empty()
}

/// At least 8 characters with a digit, a lowercase letter, an uppercase
/// letter, and a non-word character (anything outside `[A-Za-z0-9_]`).
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// The literal posting format: `$<amount>[ - <amount>] per year`.
pub fn is_valid_salary(salary: &str) -> bool {
    SALARY_RE.is_match(salary)
}

pub fn is_valid_apply_link(apply_link: &str) -> bool {
    APPLY_LINK_RE.is_match(apply_link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_rejects_non_letters() {
        assert!(is_valid_full_name("Jane Doe"));
        assert!(is_valid_full_name("Jane  van Doe"));
        assert!(!is_valid_full_name("J4ne Doe"));
        assert!(!is_valid_full_name("Jane-Doe"));
        assert!(!is_valid_full_name(""));
        assert!(!is_valid_full_name("   "));
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.doe_99@mail.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(".jane@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@example.c"));
        assert!(!is_valid_email("jane example@example.com"));
    }

    #[test]
    fn password_requires_all_character_classes() {
        assert!(is_valid_password("Abcdef1!"));
        assert!(!is_valid_password("abcdefgh"));
        assert!(!is_valid_password("Abc1!"));
        assert!(!is_valid_password("ABCDEFG1!"));
        assert!(!is_valid_password("abcdefg1!"));
        assert!(!is_valid_password("Abcdefgh!"));
        assert!(!is_valid_password("Abcdefg1_"));
    }

    #[test]
    fn salary_matches_posting_format() {
        assert!(is_valid_salary("$70,000 - 100,000 per year"));
        assert!(is_valid_salary("$70,000 per year"));
        assert!(is_valid_salary("$90000 per year"));
        assert!(!is_valid_salary("70000"));
        assert!(!is_valid_salary("$70,000 per month"));
        assert!(!is_valid_salary("$70,000-100,000 per year"));
    }

    #[test]
    fn apply_link_requires_scheme() {
        assert!(is_valid_apply_link("https://acme.example/jobs/1"));
        assert!(is_valid_apply_link("http://acme.example"));
        assert!(is_valid_apply_link("ftp://files.example/postings"));
        assert!(!is_valid_apply_link("acme.example/jobs/1"));
        assert!(!is_valid_apply_link("https://acme example.com"));
        assert!(!is_valid_apply_link("mailto:jobs@acme.example"));
    }
}
