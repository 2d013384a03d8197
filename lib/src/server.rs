/// Base url of the server handling the JSON metadata calls
pub const API_URL: &str = "https://api.dropbox.com/1";
/// Base url of the server handling the file transfers
pub const CONTENT_URL: &str = "https://api-content.dropbox.com/1";

/// The logical server a call is sent to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Server {
    Api,
    Content,
}

impl Server {
    pub fn default_url(&self) -> &'static str {
        match self {
            Self::Api => API_URL,
            Self::Content => CONTENT_URL,
        }
    }
}
