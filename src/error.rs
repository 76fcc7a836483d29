/// Numeric status codes surfaced to the relying-party glue.
///
/// The values mirror the U2F JavaScript API table and are stable; transport
/// layers embed them verbatim in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Ok = 0,
    OtherError = 1,
    BadRequest = 2,
    ConfigurationUnsupported = 3,
    DeviceIneligible = 4,
    Timeout = 5,
}

impl ErrorCode {
    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Registration only: the application id is already bound to a credential.
    #[error("application already registered: {0}")]
    DuplicateApplication(String),
    /// Sign only: no registered key handle matches the application id.
    #[error("no registered key handle matches this application")]
    DeviceIneligible,
    /// The request is missing fields required for its declared type.
    #[error("malformed request: {0}")]
    InvalidRequest(String),
    /// A crypto primitive failed. Fatal; never retried.
    #[error("crypto: {0}")]
    Crypto(#[from] crate::crypto::CryptoError),
}

impl TokenError {
    /// Status code reported to the caller. `DuplicateApplication` surfaces
    /// as `DeviceIneligible`, matching how a hardware token answers a
    /// re-registration attempt.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::DuplicateApplication(_) => ErrorCode::DeviceIneligible,
            Self::DeviceIneligible => ErrorCode::DeviceIneligible,
            Self::InvalidRequest(_) => ErrorCode::BadRequest,
            Self::Crypto(_) => ErrorCode::OtherError,
        }
    }
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values_are_stable() {
        assert_eq!(ErrorCode::Ok.value(), 0);
        assert_eq!(ErrorCode::OtherError.value(), 1);
        assert_eq!(ErrorCode::BadRequest.value(), 2);
        assert_eq!(ErrorCode::ConfigurationUnsupported.value(), 3);
        assert_eq!(ErrorCode::DeviceIneligible.value(), 4);
        assert_eq!(ErrorCode::Timeout.value(), 5);
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            TokenError::DuplicateApplication("x".into()).error_code(),
            ErrorCode::DeviceIneligible
        );
        assert_eq!(
            TokenError::DeviceIneligible.error_code(),
            ErrorCode::DeviceIneligible
        );
        assert_eq!(
            TokenError::InvalidRequest("x".into()).error_code(),
            ErrorCode::BadRequest
        );
    }
}
