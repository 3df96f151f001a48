use thiserror::Error;

/// Generic message used when a failed response carries no readable body.
pub(crate) const SERVER_ERROR_MESSAGE: &str = "Chyba serveru";

/// Ways a gateway call can fail before it is normalized into
/// [`GatewayResult::Rejected`](super::GatewayResult::Rejected).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Connection or transfer failed
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl GatewayError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            GatewayError::Timeout {
                url: url.to_string(),
            }
        } else {
            GatewayError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Text placed in `GatewayResult::Rejected::reason`.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
