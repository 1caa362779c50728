use thiserror::Error;

/// Why loading a program text (or the catalogue) failed.
///
/// Every variant is recovered where it happens: it is logged and the text
/// area keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The server answered with something other than `200 OK`.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response arrived but its body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The request never produced a response (network unreachable, aborted, ...).
    #[error("request failed: {0}")]
    Transport(String),
}

impl LoadError {
    /// Maps a response status to an error unless it is exactly `200`.
    pub fn check_status(status: u16) -> Result<(), LoadError> {
        if status == 200 {
            Ok(())
        } else {
            Err(LoadError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_passes() {
        assert_eq!(LoadError::check_status(200), Ok(()));
        assert_eq!(LoadError::check_status(204), Err(LoadError::Status(204)));
        assert_eq!(LoadError::check_status(404), Err(LoadError::Status(404)));
    }

    #[test]
    fn display_includes_detail() {
        assert_eq!(LoadError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(
            LoadError::Transport("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
