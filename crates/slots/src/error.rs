#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed resolution for slot '{slot}': {reason}")]
    MalformedResolution { slot: String, reason: &'static str },
}

impl Error {
    pub fn malformed(slot: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedResolution {
            slot: slot.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
