use marks::errors::{MarksError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = MarksError::validation("Title is required");

        assert!(matches!(error, MarksError::Validation(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("Title is required"));
    }

    #[test]
    fn test_index_out_of_range_error() {
        let error = MarksError::index_out_of_range("index 4 of 2");

        assert!(matches!(error, MarksError::IndexOutOfRange(_)));
        assert_eq!(error.code(), "E002");
        assert_eq!(error.message(), "index 4 of 2");
    }

    #[test]
    fn test_load_and_save_errors() {
        let load = MarksError::load("bad json");
        let save = MarksError::save("disk full");

        assert_eq!(load.error_type(), "Load Error");
        assert_eq!(save.error_type(), "Save Error");
        assert_eq!(save.format_simple(), "Save Error: disk full");
    }

    #[test]
    fn test_every_variant_has_distinct_code() {
        let errors = [
            MarksError::validation("x"),
            MarksError::index_out_of_range("x"),
            MarksError::load("x"),
            MarksError::save("x"),
            MarksError::file_operation("x"),
            MarksError::serialization("x"),
            MarksError::open_url("x"),
            MarksError::import("x"),
            MarksError::config("x"),
            MarksError::terminal("x"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod error_behaviour_tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(MarksError::validation("x").is_recoverable());
        assert!(MarksError::index_out_of_range("x").is_recoverable());
        assert!(MarksError::open_url("x").is_recoverable());
        assert!(!MarksError::save("x").is_recoverable());
        assert!(!MarksError::load("x").is_recoverable());
    }

    #[test]
    fn test_colored_format_contains_code_and_message() {
        let formatted = MarksError::config("bad level").format_colored();
        assert!(formatted.contains("E009"));
        assert!(formatted.contains("bad level"));
    }

    #[test]
    fn test_error_trait() {
        let error = MarksError::terminal("no tty");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
        assert_eq!(dyn_error.to_string(), "Terminal Error: no tty");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: MarksError = io_error.into();
        assert!(matches!(error, MarksError::FileOperation(_)));
        assert!(error.message().contains("missing"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let error: MarksError = json_error.into();
        assert!(matches!(error, MarksError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read(path: &str) -> Result<String> {
            Ok(std::fs::read_to_string(path)?)
        }
        let err = read("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
