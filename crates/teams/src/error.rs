//! Error types for the Teams activity extensions.

use thiserror::Error;

/// Errors raised while reading or enriching an activity.
#[derive(Debug, Error)]
pub enum TeamsError {
    /// A caller-supplied value violates a precondition
    #[error("{0}")]
    InvalidArgument(String),

    /// A required payload (channel data) is absent from the activity
    #[error("{0}")]
    MissingData(String),

    /// The payload is present but a required field is absent, empty or unrecognized
    #[error("{0}")]
    Malformed(String),

    /// A payload could not be decoded or encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of a [`TeamsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong activity type, missing mention target, missing mention text.
    InvalidArgument,
    /// Channel data entirely absent.
    MissingData,
    /// Channel data present but structurally unusable.
    Malformed,
}

impl TeamsError {
    /// Get the kind of this error.
    ///
    /// Decode and encode failures count as [`ErrorKind::Malformed`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::MissingData(_) => ErrorKind::MissingData,
            Self::Malformed(_) | Self::Serialization(_) => ErrorKind::Malformed,
        }
    }

    pub(crate) fn channel_data_missing() -> Self {
        Self::MissingData("ChannelData missing in Activity".to_string())
    }

    pub(crate) fn channel_data_unprocessable() -> Self {
        Self::Malformed("Failed to process channel data in Activity".to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TeamsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            TeamsError::InvalidArgument("x".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            TeamsError::channel_data_missing().kind(),
            ErrorKind::MissingData
        );
        assert_eq!(
            TeamsError::channel_data_unprocessable().kind(),
            ErrorKind::Malformed
        );

        let decode = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert_eq!(TeamsError::from(decode).kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            TeamsError::channel_data_missing().to_string(),
            "ChannelData missing in Activity"
        );
        assert_eq!(
            TeamsError::channel_data_unprocessable().to_string(),
            "Failed to process channel data in Activity"
        );
    }

    #[test]
    fn test_decode_failure_is_serialization() {
        let decode = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = TeamsError::from(decode);

        assert!(matches!(err, TeamsError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
