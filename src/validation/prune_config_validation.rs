use crate::validation::validation_utils::fail_validation_on_duplicates;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::is_separator;
use validator::ValidationError;

pub(crate) fn validate_headers(headers: &[String]) -> Result<(), ValidationError> {
    validate_header_names(headers)?;
    validate_unique_headers(headers)
}

pub(crate) fn validate_unique_headers(headers: &[String]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let duplicates: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|header| !seen.insert(*header))
        .collect();
    fail_validation_on_duplicates(&duplicates, "duplicates", "Found duplicate file headers")
}

/// File headers end up as the leading part of a file name, so they can not be
/// empty or reach into other directories.
pub(crate) fn validate_header_names(headers: &[String]) -> Result<(), ValidationError> {
    let invalid: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|header| header.is_empty() || header.chars().any(is_separator))
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_header");
        error.add_param(Cow::from("headers"), &invalid);
        Err(error.with_message(Cow::Borrowed(
            "File headers must be non-empty and must not contain path separators",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    fn test_unique_headers() {
        assert!(validate_unique_headers(&headers(&["x", "q", "x.y0"])).is_ok());
        assert!(validate_unique_headers(&headers(&["x", "q", "x"])).is_err());
    }

    #[rstest]
    #[case(&["x", "q.surf"], true)]
    #[case(&["x", ""], false)]
    #[case(&["../x"], false)]
    fn test_header_names(#[case] names: &[&str], #[case] valid: bool) {
        assert_eq!(validate_header_names(&headers(names)).is_ok(), valid);
    }
}
