//! Host signal errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("Signal unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected signal value: {0}")]
    UnexpectedValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_error_display() {
        let err = SignalError::UnexpectedValue("maybe".to_string());
        assert!(err.to_string().contains("maybe"));
        let err = SignalError::Unavailable("no tab".to_string());
        assert!(err.to_string().contains("no tab"));
    }
}
