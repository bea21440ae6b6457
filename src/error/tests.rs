//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let fpl_error = FplError::from(header_error);

        match fpl_error {
            FplError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_api_error_display_includes_path_status_and_body() {
        let error = FplError::Api {
            path: "/element-summary/7/".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
            body: "The game is being updated.".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("/element-summary/7/"));
        assert!(error_string.contains("404"));
        assert!(error_string.contains("The game is being updated."));
    }

    #[test]
    fn test_input_errors_are_surfaced_verbatim() {
        let error = FplError::InvalidInput {
            message: "either --id or --name must be provided".to_string(),
        };
        assert_eq!(error.to_string(), "either --id or --name must be provided");

        let error = FplError::invalid_gameweek("gameweek must be a positive integer: 0");
        assert_eq!(error.to_string(), "gameweek must be a positive integer: 0");
    }

    #[test]
    fn test_no_match_error_quotes_query() {
        let error = FplError::NoMatch {
            query: "zzz".to_string(),
        };
        assert_eq!(error.to_string(), "no players found matching \"zzz\"");
    }

    #[test]
    fn test_player_not_found_error() {
        let error = FplError::PlayerNotFound { id: 9999 };
        assert_eq!(
            error.to_string(),
            "player with ID 9999 not found in bootstrap data"
        );
    }

    #[test]
    fn test_empty_query_and_duration_errors() {
        assert_eq!(FplError::EmptyQuery.to_string(), "player name cannot be empty");

        let error = FplError::InvalidDuration {
            value: "soon".to_string(),
        };
        assert!(error.to_string().contains("soon"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = FplError::EmptyQuery;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("EmptyQuery"));
    }
}
