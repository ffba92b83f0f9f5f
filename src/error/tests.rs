//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[test]
    fn test_api_error_reason_phrases() {
        let cases = [
            (400, "Bad Request"),
            (404, "Not Found"),
            (429, "Too Many Requests"),
            (500, "Internal Server Error"),
            (503, "Service Unavailable"),
        ];

        for (status, reason) in cases {
            let err = ApiError::from_status(status);
            assert_eq!(err.status_code, status);
            assert_eq!(err.message, reason);
            assert_eq!(err.to_string(), format!("API error: {status} {reason}"));
        }
    }

    #[test]
    fn test_api_error_unregistered_status_has_empty_message() {
        let err = ApiError::from_status(599);
        assert_eq!(err.message, "");
        assert_eq!(err.to_string(), "API error: 599 ");
    }

    #[test]
    fn test_api_error_conversion_is_transparent() {
        let err = SleeperError::from(ApiError::from_status(404));
        assert_eq!(err.to_string(), "API error: 404 Not Found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_status_code_only_for_api_errors() {
        assert_eq!(SleeperError::Cancelled.status_code(), None);
        assert_eq!(SleeperError::NotFound { what: "user" }.status_code(), None);
    }

    #[test]
    fn test_cancelled_predicates() {
        assert!(SleeperError::Cancelled.is_cancelled());
        assert!(SleeperError::transport(RequestAborted).is_cancelled());
        assert!(!SleeperError::transport(io::Error::other("reset")).is_cancelled());
        assert!(!SleeperError::read(RequestAborted).is_cancelled());
    }

    #[tokio::test]
    async fn test_timeout_predicate() {
        let elapsed = tokio::time::timeout(
            std::time::Duration::ZERO,
            std::future::pending::<()>(),
        )
        .await
        .unwrap_err();

        let err = SleeperError::transport(elapsed);
        assert!(err.is_timeout());
        assert!(!err.is_cancelled());
        assert!(!SleeperError::transport(RequestAborted).is_timeout());
        assert!(!SleeperError::Cancelled.is_timeout());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SleeperError::Cancelled.to_string(),
            "Request cancelled before it was sent"
        );
        assert_eq!(
            SleeperError::NotFound { what: "league" }.to_string(),
            "league not found"
        );
        assert_eq!(
            SleeperError::InvalidInput {
                message: "league_id is required".to_string()
            }
            .to_string(),
            "Invalid request: league_id is required"
        );
        assert_eq!(
            SleeperError::config("bad").to_string(),
            "Configuration error: bad"
        );
        assert_eq!(
            SleeperError::transport(RequestAborted).to_string(),
            "Completing request: request aborted by caller"
        );
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = SleeperError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("SLEEPER_LEAGUE_ID"));
    }

    #[test]
    fn test_decode_error_names_the_resource() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SleeperError::Decode {
            what: "league rosters",
            source,
        };
        assert!(err.to_string().starts_with("Decoding league rosters: "));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = SleeperError::from(io_error);

        match err {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let err = SleeperError::read(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));

        let error_trait: &dyn std::error::Error = &err;
        let source = error_trait.source().unwrap();
        assert_eq!(source.to_string(), "eof");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(SleeperError::NotFound { what: "draft" })
        }

        match test_function().unwrap_err() {
            SleeperError::NotFound { what } => assert_eq!(what, "draft"),
            _ => panic!("Expected NotFound error"),
        }
    }
}
