//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use wavetile::AlgorithmError;
    use wavetile::io::error::invalid_parameter;

    #[test]
    fn file_system_error_chains_its_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read"));
    }

    #[test]
    fn display_mentions_field_name() {
        let error = AlgorithmError::InvalidParameter {
            parameter: "tile_size",
            value: "-1".to_string(),
            reason: "must be positive".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn unknown_tile_display_contains_index() {
        let error = AlgorithmError::UnknownTile { index: 7 };
        assert!(error.to_string().contains('7'));
    }

    #[test]
    fn out_of_range_display_contains_index_and_max() {
        let error = AlgorithmError::OutOfRange { index: 9, max: 4 };
        let message = error.to_string();
        assert!(message.contains('9'));
        assert!(message.contains('4'));
    }

    #[test]
    fn image_export_error_chains_source_and_mentions_path() {
        let path = PathBuf::from("/restricted/output.png");
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = AlgorithmError::ImageExport {
            path: path.clone(),
            source: image_error,
        };

        assert!(error.to_string().contains("/restricted/output.png"));
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_parameter_helper_formats_reason() {
        let error = invalid_parameter("width", &-5, &"must be positive");
        match error {
            AlgorithmError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "width");
                assert_eq!(value, "-5");
                assert_eq!(reason, "must be positive");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn invalid_document_error_has_no_source() {
        let error = AlgorithmError::InvalidDocument {
            reason: "missing field".into(),
        };
        assert!(error.source().is_none());
        assert!(error.to_string().contains("missing field"));
    }
}
