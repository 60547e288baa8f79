// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use coin_dashboard_core::errors::{redact_query, CoreError};

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "Request failed with status 500".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (CoinGecko): Request failed with status 500"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection reset".into());
        assert_eq!(err.to_string(), "Network error: connection reset");
    }

    #[test]
    fn rate_limited() {
        let err = CoreError::RateLimited("CoinGecko".into());
        assert_eq!(err.to_string(), "Rate limit exceeded (CoinGecko)");
    }

    #[test]
    fn not_found() {
        let err = CoreError::NotFound("coin dogecoin2".into());
        assert_eq!(err.to_string(), "Not found: coin dogecoin2");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("missing field `id`".into());
        assert_eq!(err.to_string(), "Deserialization error: missing field `id`");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Coin id must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: Coin id must not be empty");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("per_page must be between 1 and 250, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: per_page must be between 1 and 250, got 0"
        );
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("no such file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("per_page = ").unwrap_err();
        let err: CoreError = toml_err.into();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn question_mark_converts() {
        fn parse(text: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(text)?)
        }
        assert!(parse("[]").is_ok());
        assert!(matches!(parse("]"), Err(CoreError::Deserialization(_))));
    }
}

// ── Query redaction ─────────────────────────────────────────────────

mod redaction {
    use super::*;

    #[test]
    fn strips_query_string() {
        let msg = "error sending request for url (https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&page=1)";
        assert_eq!(
            redact_query(msg),
            "error sending request for url (https://api.coingecko.com/api/v3/coins/markets?<query redacted>"
        );
    }

    #[test]
    fn leaves_messages_without_query_alone() {
        assert_eq!(redact_query("operation timed out"), "operation timed out");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<CoreError>();
    }
}
