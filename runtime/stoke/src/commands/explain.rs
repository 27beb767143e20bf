//! The `explain` command: display documentation for diagnostic codes.

use stoke_diagnostic::{ErrorCode, ErrorDocs};

/// Look up the documentation for a code string such as `L0004`.
pub fn explain_code(code_str: &str) -> Result<&'static str, String> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(format!(
            "Unknown error code: {code_str}\n\n\
             Codes have the format LXXXX (errors) or WXXXX (warnings) where X is a digit.\n\
             Examples: L0001, L0004, W0001"
        ));
    };

    ErrorDocs::get(code).ok_or_else(|| format!("No documentation available for {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        let doc = explain_code("l0005").unwrap();
        assert!(doc.starts_with("# L0005"));
    }

    #[test]
    fn test_unknown_code() {
        let err = explain_code("E0001").unwrap_err();
        assert!(err.starts_with("Unknown error code: E0001"));
    }
}
