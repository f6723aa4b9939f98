//! Error handling foundation for genrelay.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types in their own
//! error modules and converts them into reports as they propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// The context type `C` is the domain error of the layer that produced the report.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    fn fails() -> Result<i32, Boom> {
        Err(Boom)?
    }

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn domain_errors_convert_into_reports() {
        let err = fails().expect_err("should fail");
        assert!(err.to_string().contains("boom"));
    }
}
