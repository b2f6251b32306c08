//! WhatsApp number handling
//!
//! Customers type numbers in local (`08…`) or international (`62…`) form,
//! often with spaces, dashes or parentheses. Storage and chat links use the
//! bare international digits.

/// Country calling code for Indonesia
pub const COUNTRY_CODE: &str = "62";

/// Prefixes accepted for a customer number after separators are stripped
pub const ACCEPTED_PREFIXES: [&str; 3] = ["08", "62", "628"];

/// Remove spaces, dashes and parentheses
pub fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

pub fn has_accepted_prefix(digits: &str) -> bool {
    ACCEPTED_PREFIXES.iter().any(|p| digits.starts_with(p))
}

/// Convert to the `62…` form used for storage and chat links
///
/// A leading `0` is replaced by the country code; anything not already
/// starting with `62` gets it prepended.
pub fn normalize(raw: &str) -> String {
    let digits = strip_separators(raw);
    if let Some(rest) = digits.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else if digits.starts_with(COUNTRY_CODE) {
        digits
    } else {
        format!("{COUNTRY_CODE}{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("(0858) 6413-9786"), "085864139786");
        assert_eq!(strip_separators(" 62 858 "), "62858");
    }

    #[test]
    fn test_normalize_local_number() {
        assert_eq!(normalize("085864139786"), "6285864139786");
        assert_eq!(normalize("0858-6413-9786"), "6285864139786");
    }

    #[test]
    fn test_normalize_international_untouched() {
        assert_eq!(normalize("6285864139786"), "6285864139786");
        assert_eq!(normalize("62 858 6413 9786"), "6285864139786");
    }

    #[test]
    fn test_normalize_prepends_country_code() {
        assert_eq!(normalize("85864139786"), "6285864139786");
    }

    #[test]
    fn test_accepted_prefixes() {
        assert!(has_accepted_prefix("0858"));
        assert!(has_accepted_prefix("628"));
        assert!(has_accepted_prefix("6221"));
        assert!(!has_accepted_prefix("0758"));
        assert!(!has_accepted_prefix("8586"));
    }
}
