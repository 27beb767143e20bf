use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::L0002.to_string(), "L0002");
    assert_eq!(ErrorCode::W0001.as_str(), "W0001");
}

#[test]
fn test_warning_range() {
    assert!(ErrorCode::W0001.is_warning());
    assert!(!ErrorCode::L0005.is_warning());
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("l0004".parse::<ErrorCode>(), Ok(ErrorCode::L0004));
    assert_eq!(" L0007 ".parse::<ErrorCode>(), Ok(ErrorCode::L0007));
}

#[test]
fn test_parse_unknown() {
    let err = "E0001".parse::<ErrorCode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `E0001`");
}

#[test]
fn test_all_codes_parse_back() {
    for code in ErrorCode::all() {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
}
