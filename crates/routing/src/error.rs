use skillroute_protocol::{ErrorShape, ROUTE_NOT_FOUND, error_codes};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every route was tried and none produced a response.
    #[error("Route not found")]
    NotFound,

    #[error("event carries no intent")]
    MissingIntent,

    #[error(transparent)]
    Slots(#[from] skillroute_slots::Error),

    /// Raised by handler code; passed through untouched.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => error_codes::NOT_FOUND,
            Self::MissingIntent => error_codes::MISSING_INTENT,
            Self::Slots(_) => error_codes::MALFORMED_RESOLUTION,
            Self::Handler(_) => error_codes::HANDLER_FAILED,
        }
    }

    /// HTTP-equivalent status for the transport.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::MissingIntent => 400,
            Self::Slots(_) => 422,
            Self::Handler(_) => 500,
        }
    }

    /// Client-facing body. Handler failures are not echoed back.
    pub fn to_error_shape(&self) -> ErrorShape {
        match self {
            Self::NotFound => ErrorShape::new(self.code(), ROUTE_NOT_FOUND, self.status()),
            Self::Handler(_) => ErrorShape::new(self.code(), "handler failed", self.status()),
            _ => ErrorShape::new(self.code(), self.to_string(), self.status()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
