use crate::common::error::ClonerError;

/// Result alias used across the crate.
pub type ClonerResult<T> = Result<T, ClonerError>;

/// Conversion helpers from `Option` into [`ClonerResult`].
pub trait OptionExt<T> {
    /// Turn `None` into a [`ClonerError::ValidationError`] for `field`.
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ClonerResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ClonerResult<T> {
        self.ok_or_else(|| ClonerError::validation_error(field, message, None))
    }
}

/// Logging helpers for results whose failure is reported but not propagated.
pub trait ClonerResultExt<T> {
    /// Log the error at `error` level and convert into an `Option`.
    fn to_option_logged(self) -> Option<T>;
}

impl<T> ClonerResultExt<T> for ClonerResult<T> {
    fn to_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }
}
