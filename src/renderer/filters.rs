use log::warn;
use regex::Regex;

pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, screaming_snake::to_screaming_snake_case,
    snake::to_snake_case,
};

/// Tests whether a metadata value matches a regular expression.
///
/// An invalid pattern is logged and treated as a non-match so a typo in one
/// template does not hide the real failure elsewhere.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_filter_matches_ip_address() {
        assert!(regex_filter("10.0.0.4", r"^\d+\.\d+\.\d+\.\d+$"));
        assert!(!regex_filter("db.internal", r"^\d+\.\d+\.\d+\.\d+$"));
    }

    #[test]
    fn regex_filter_invalid_regex() {
        assert!(!regex_filter("anything", r"([unclosed"));
    }

    #[test]
    fn case_helpers() {
        assert_eq!(to_screaming_snake_case("db host"), "DB_HOST");
        assert_eq!(to_kebab_case("Web Server"), "web-server");
    }
}
