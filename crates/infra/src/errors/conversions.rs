//! Conversions from external infrastructure errors into domain errors.

use image::ImageError;
use numerolog_domain::constants::messages;
use numerolog_domain::NumerologyError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub NumerologyError);

impl From<InfraError> for NumerologyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<NumerologyError> for InfraError {
    fn from(value: NumerologyError) -> Self {
        InfraError(value)
    }
}

/// Map any error with an infrastructure conversion into the domain error.
///
/// Meant for `map_err(into_domain)` at adapter boundaries.
pub fn into_domain<E>(err: E) -> NumerologyError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoNumerologyError {
    fn into_numerology(self) -> NumerologyError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → NumerologyError */
/* -------------------------------------------------------------------------- */

impl IntoNumerologyError for HttpError {
    fn into_numerology(self) -> NumerologyError {
        if self.is_timeout() {
            return NumerologyError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return NumerologyError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return NumerologyError::Api(format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        if self.is_decode() {
            return NumerologyError::Api(messages::REQUEST_FAILED.into());
        }

        NumerologyError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_numerology())
    }
}

/* -------------------------------------------------------------------------- */
/* image::ImageError → NumerologyError */
/* -------------------------------------------------------------------------- */

impl IntoNumerologyError for ImageError {
    fn into_numerology(self) -> NumerologyError {
        let message = match self {
            ImageError::Encoding(_) => messages::AVATAR_ENCODE_FAILED,
            ImageError::IoError(_) => messages::AVATAR_READ_FAILED,
            ImageError::Decoding(_)
            | ImageError::Unsupported(_)
            | ImageError::Limits(_)
            | ImageError::Parameter(_) => messages::AVATAR_DECODE_FAILED,
        };
        NumerologyError::Avatar(message.into())
    }
}

impl From<ImageError> for InfraError {
    fn from(value: ImageError) -> Self {
        InfraError(value.into_numerology())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → NumerologyError */
/* -------------------------------------------------------------------------- */

impl IntoNumerologyError for JsonError {
    fn into_numerology(self) -> NumerologyError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => NumerologyError::Internal(format!("JSON I/O failure: {self}")),
            Category::Syntax | Category::Eof => {
                NumerologyError::Api(messages::REQUEST_FAILED.into())
            }
            Category::Data => {
                NumerologyError::Internal(format!("unexpected response shape: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_numerology())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
