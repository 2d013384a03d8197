//! Client for the [Dropbox core API](https://www.dropbox.com/developers-v1/core/docs).
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = dropbox::builder::ClientBuilder::from_env()
//!     .with_root("app_folder")
//!     .build()?;
//! let account = client.account_info().await?;
//! println!("hello {}", account.display_name);
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod account;
pub mod builder;
pub mod credentials;
mod date;
pub mod entry;
pub mod error;
pub mod file;
pub mod metadata;
pub mod path;
mod request;
pub mod root;
pub mod server;

pub use credentials::Credentials;
pub use error::Error;
pub use root::Root;
pub use server::Server;

pub use reqwest;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!("dropbox-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// Result type returned by every call of the [`Client`]
pub type Result<V> = std::result::Result<V, Error>;

/// Client for the Dropbox REST API
///
/// Holds the immutable configuration (credentials, root, locale, servers)
/// shared by every call. Cloning is cheap, the underlying connection pool is shared.
#[derive(Clone)]
pub struct Client {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    credentials: Credentials,
    root: Root,
    locale: Option<String>,
    inner: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Client))
            .field("api_url", &self.api_url)
            .field("content_url", &self.content_url)
            .field("root", &self.root)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client talking to the default Dropbox servers.
    ///
    /// # Errors
    ///
    /// Returns [`builder::Error::InvalidRoot`] when `root` is not one of
    /// `"dropbox"`, `"app_folder"` or `"auto"`.
    pub fn new(
        credentials: Credentials,
        client_identifier: impl Into<String>,
        root: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<Self, builder::Error> {
        builder::ClientBuilder::default()
            .with_credentials(credentials)
            .with_client_identifier(client_identifier)
            .with_root(root)
            .build()
    }

    /// The root namespace every path is resolved against.
    pub fn root(&self) -> Root {
        self.root
    }

    fn server_url(&self, server: Server) -> &str {
        match server {
            Server::Api => self.api_url.as_ref(),
            Server::Content => self.content_url.as_ref(),
        }
    }
}
