//! Client-side e-mail allow-list, checked before the identity-provider
//! call ever goes out.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ALLOWED_EMAILS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "production@high5clothing.co.uk",
        "design@high5clothing.co.uk",
        "sales@high5clothing.co.uk",
        "accounts@high5clothing.co.uk",
        "admin@high5clothing.co.uk",
    ])
});

pub fn is_allowed(email: &str) -> bool {
    ALLOWED_EMAILS.contains(email.trim().to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_is_case_insensitive_and_trimmed() {
        assert!(is_allowed("production@high5clothing.co.uk"));
        assert!(is_allowed("  Production@High5Clothing.co.uk "));
        assert!(!is_allowed("someone@example.com"));
        assert!(!is_allowed(""));
    }
}
