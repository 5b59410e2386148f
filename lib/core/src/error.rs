//! Error handling foundation for the SamCast admin panel.
//!
//! Only the `Result` alias lives here. Each crate owns its domain error
//! enums and wraps them in a rootcause `Report` at infrastructure seams.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Unreachable;

    impl std::fmt::Display for Unreachable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "upstream unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    fn probe(up: bool) -> Result<&'static str, Unreachable> {
        if up {
            Ok("online")
        } else {
            Err(Unreachable.into())
        }
    }

    #[test]
    fn result_carries_typed_context() {
        assert_eq!(probe(true).expect("should be ok"), "online");
        let report = probe(false).unwrap_err();
        assert!(report.to_string().contains("upstream unreachable"));
    }
}
