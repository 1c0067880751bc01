//! Integration tests for error types

#[cfg(test)]
mod tests {
    use fastformer_errors::*;

    #[test]
    fn test_error_conversion() {
        let err: Error = BuilderError::unknown_parameter("EncoderBuilder", "heads").into();
        assert!(matches!(
            err.as_builder(),
            Some(BuilderError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_unknown_parameter_display() {
        let err = BuilderError::unknown_parameter("EncoderBuilder", "heads");
        assert_eq!(
            err.to_string(),
            "builder `EncoderBuilder` has no parameter `heads`"
        );
    }

    #[test]
    fn test_invalid_value_source() {
        use std::error::Error as _;

        let err = BuilderError::InvalidValue {
            builder: "EncoderBuilder".into(),
            name: "n_layers".into(),
            source: ValueError::mismatch("unsigned integer", "string"),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("expected unsigned integer, found string")
        );
    }

    #[test]
    fn test_user_codes() {
        let err: Error = BuilderError::NotImplemented {
            builder: "AbstractBuilder".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("builder.not_implemented"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());

        let err: Error = ConfigError::NotFound {
            path: "/tmp/missing.toml".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("config.not_found"));
    }

    #[test]
    fn test_error_clone() {
        let err = BuilderError::construction("EncoderBuilder", "n_heads must be positive");
        let cloned = err.clone();
        assert_eq!(err, cloned);
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(&io_err, std::path::Path::new("/etc/params.toml"));
        assert!(matches!(&err, Error::Io { path, .. } if path == "/etc/params.toml"));
        assert_eq!(err.to_string(), "I/O error on /etc/params.toml: denied");
        assert_eq!(err.user_code(), Some("error.io"));
        assert!(err.user_hint().is_some());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_json_error_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(ConfigError::ParseError { .. })));
    }
}
