//! quickunit Core - Fundamental types
//!
//! This crate provides the primitives shared by the converter and its server:
//! - Lenient numeric input parsing
//! - Fixed-decimal rounding and display
//! - `ErrorReport`: structured errors for clients

mod number;
mod error;

pub use number::{
    NumberError, DECIMAL_PLACES,
    parse_leading_float, parse_finite, round_half_away, to_fixed, format_plain,
};
pub use error::{ErrorReport, Severity, codes};

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_display() {
            let err = ErrorReport::new(codes::PARSE_ERROR, "bad line");
            assert_eq!(format!("{}", err), "[PARSE_ERROR] bad line");

            let err = err.with_suggestion("send JSON");
            assert_eq!(format!("{}", err), "[PARSE_ERROR] bad line (suggestion: send JSON)");
        }

        #[test]
        fn test_unsupported_pair_message() {
            let err = ErrorReport::unsupported_pair("celsius", "celsius", Some("quick table"));
            assert_eq!(err.code, codes::UNSUPPORTED_PAIR);
            assert_eq!(err.message, "No conversion from 'celsius' to 'celsius' in quick table");
            assert!(err.suggestion.is_some());
        }

        #[test]
        fn test_internal_is_fatal() {
            let err = ErrorReport::internal("table missing");
            assert_eq!(err.severity, Severity::Fatal);
            assert_eq!(ErrorReport::parse_error("x").severity, Severity::Error);
        }

        #[test]
        fn test_invalid_request_message() {
            let err = ErrorReport::invalid_request("missing field `method`");
            assert_eq!(err.code, codes::INVALID_REQUEST);
            assert_eq!(err.message, "Invalid request: missing field `method`");
            assert_eq!(err.severity, Severity::Error);
        }

        #[test]
        fn test_serialized_shape() {
            let err = ErrorReport::invalid_params("missing value");
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "INVALID_PARAMS");
            assert_eq!(json["severity"], "error");
            assert!(json.get("suggestion").is_none());
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn test_parse_then_fix() {
            let value = parse_finite(" 100 degrees").unwrap();
            assert_eq!(format_plain(value), "100");
            assert_eq!(to_fixed(value, DECIMAL_PLACES), "100.0000");
        }
    }
}
