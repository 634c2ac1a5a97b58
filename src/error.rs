// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translate(TranslateError),
}

/// Specific failure modes of a translation request.
///
/// All three collapse into the same fixed, localized message for the user;
/// the variant detail only matters for the operator-facing diagnostics on
/// stderr.
#[derive(Debug, Clone)]
pub enum TranslateError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    Network(String),

    /// The service answered with a non-2xx HTTP status.
    Status(u16),

    /// The body was not the JSON shape the service documents.
    MalformedResponse(String),
}

/// Fluent key for the single user-visible translation failure message.
pub const TRANSLATE_ERROR_KEY: &str = "error-translation-failed";

impl TranslateError {
    /// Returns the i18n message key shown to the user.
    ///
    /// Deliberately the same for every variant: the user can only retype,
    /// so distinguishing causes in the UI adds nothing.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        TRANSLATE_ERROR_KEY
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Network(msg) => write!(f, "network error: {msg}"),
            TranslateError::Status(code) => write!(f, "HTTP status {code}"),
            TranslateError::MalformedResponse(msg) => {
                write!(f, "malformed response body: {msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Translate(e) => write!(f, "Translation Error: {e}"),
        }
    }
}

impl From<TranslateError> for Error {
    fn from(err: TranslateError) -> Self {
        Error::Translate(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn translate_error_status_display_carries_code() {
        let err = TranslateError::Status(500);
        assert_eq!(format!("{}", err), "HTTP status 500");
    }

    #[test]
    fn every_translate_variant_maps_to_the_same_key() {
        let variants = [
            TranslateError::Network("down".into()),
            TranslateError::Status(429),
            TranslateError::MalformedResponse("eof".into()),
        ];
        for variant in variants {
            assert_eq!(variant.i18n_key(), TRANSLATE_ERROR_KEY);
        }
    }

    #[test]
    fn translate_error_converts_into_error() {
        let err: Error = TranslateError::Network("refused".into()).into();
        assert!(matches!(err, Error::Translate(_)));
    }
}
