//! The errors returned by the client calls

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server rejected the access token
    #[error("user is not authenticated")]
    Auth,
    /// The content didn't change since the provided `hash`
    #[error("not modified")]
    NotModified,
    /// The server failed to handle the request
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
    /// The request was properly handled by the server but rejected
    #[error("api error {status}: {error}")]
    Api {
        status: u16,
        error: String,
        user_error: Option<String>,
    },
    /// The file metadata header of a download is missing or malformed.
    ///
    /// The status and headers of the response are kept for diagnostics, its body is left unread.
    #[error("server error: x-dropbox-metadata={}", raw.as_deref().unwrap_or_default())]
    Metadata {
        raw: Option<String>,
        status: u16,
        headers: reqwest::header::HeaderMap,
    },
    /// Unable to parse a JSON response
    #[error("unable to parse json response")]
    Json(#[from] serde_json::Error),
    /// Error from the HTTP layer
    #[error("network error")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// The HTTP status of the response that triggered the error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth => Some(401),
            Self::NotModified => Some(304),
            Self::Server { status, .. } | Self::Api { status, .. } | Self::Metadata { status, .. } => {
                Some(*status)
            }
            Self::Reqwest(inner) => inner.status().map(|status| status.as_u16()),
            Self::Json(_) => None,
        }
    }

    /// The message meant to be displayed to the end user, when provided by the server.
    pub fn user_error(&self) -> Option<&str> {
        match self {
            Self::Api { user_error, .. } => user_error.as_deref(),
            _ => None,
        }
    }
}
