use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no access token has been provided.
    #[error("no credentials provided")]
    CredentialsMissing,
    /// Returned when the root namespace is not recognized.
    #[error(transparent)]
    InvalidRoot(#[from] crate::root::InvalidRoot),
    /// Returned when the `DROPBOX_TIMEOUT` environment variable is not a number of milliseconds.
    #[error("invalid timeout {0:?}, expected a number of milliseconds")]
    InvalidTimeout(String),
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```
/// use dropbox::builder::ClientBuilder;
/// use dropbox::Credentials;
///
/// let client = ClientBuilder::default()
///     .with_credentials(Credentials::access_token("my-token"))
///     .with_client_identifier("my-app/1.0")
///     .with_root("app_folder")
///     .build()
///     .expect("unable to build client");
/// assert_eq!(client.root().as_str(), "sandbox");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    client_identifier: String,
    credentials: Option<crate::Credentials>,
    locale: Option<String>,
    root: Cow<'static, str>,
    timeout: Result<Option<Duration>, String>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - The official API and content servers.
    /// - The `auto` root.
    /// - No credentials, no client identifier, no locale.
    fn default() -> Self {
        Self {
            api_url: Cow::Borrowed(crate::Server::Api.default_url()),
            content_url: Cow::Borrowed(crate::Server::Content.default_url()),
            client_builder: None,
            client_identifier: String::new(),
            credentials: None,
            locale: None,
            root: Cow::Borrowed(crate::Root::default().as_str()),
            timeout: Ok(None),
        }
    }
}

fn timeout_from_env() -> Result<Option<Duration>, String> {
    match std::env::var("DROPBOX_TIMEOUT") {
        Ok(value) => value
            .parse::<u64>()
            .map(|millis| Some(Duration::from_millis(millis)))
            .map_err(|_| value),
        Err(_) => Ok(None),
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - `DROPBOX_ACCESS_TOKEN` for the credentials.
    /// - `DROPBOX_CLIENT_IDENTIFIER`, `DROPBOX_ROOT` and `DROPBOX_LOCALE`.
    /// - `DROPBOX_API_URL` and `DROPBOX_CONTENT_URL` to override the servers.
    /// - `DROPBOX_TIMEOUT`, in milliseconds. An invalid value makes [`build`](Self::build) fail.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("DROPBOX_API_URL")
                .map(Cow::Owned)
                .unwrap_or(defaults.api_url),
            content_url: std::env::var("DROPBOX_CONTENT_URL")
                .map(Cow::Owned)
                .unwrap_or(defaults.content_url),
            client_builder: None,
            client_identifier: std::env::var("DROPBOX_CLIENT_IDENTIFIER").unwrap_or_default(),
            credentials: crate::Credentials::from_env(),
            locale: std::env::var("DROPBOX_LOCALE").ok(),
            root: std::env::var("DROPBOX_ROOT")
                .map(Cow::Owned)
                .unwrap_or(defaults.root),
            timeout: timeout_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets the base url of the API server.
    pub fn set_api_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.api_url = value.into();
    }

    /// Sets the base url of the API server and returns the modified builder.
    pub fn with_api_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_api_url(value);
        self
    }

    /// Sets the base url of the content server.
    pub fn set_content_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.content_url = value.into();
    }

    /// Sets the base url of the content server and returns the modified builder.
    pub fn with_content_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_content_url(value);
        self
    }

    /// Points both servers to the same base url.
    pub fn set_base_url(&mut self, value: impl Into<Cow<'static, str>>) {
        let value = value.into();
        self.content_url = value.clone();
        self.api_url = value;
    }

    /// Points both servers to the same base url and returns the modified builder.
    pub fn with_base_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(value);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = Some(value);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(value);
        self
    }

    /// Sets the tag identifying the application, prepended to the user agent.
    pub fn set_client_identifier(&mut self, value: impl Into<String>) {
        self.client_identifier = value.into();
    }

    /// Sets the client identifier and returns the modified builder.
    pub fn with_client_identifier(mut self, value: impl Into<String>) -> Self {
        self.set_client_identifier(value);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, value: crate::Credentials) {
        self.credentials = Some(value);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, value: crate::Credentials) -> Self {
        self.set_credentials(value);
        self
    }

    /// Sets the locale used by the server to localize error messages.
    pub fn set_locale(&mut self, value: impl Into<String>) {
        self.locale = Some(value.into());
    }

    /// Sets the locale and returns the modified builder.
    pub fn with_locale(mut self, value: impl Into<String>) -> Self {
        self.set_locale(value);
        self
    }

    /// Sets the root namespace, one of `"dropbox"`, `"app_folder"` or `"auto"`.
    ///
    /// The value is validated when building the client.
    pub fn set_root(&mut self, value: impl Into<Cow<'static, str>>) {
        self.root = value.into();
    }

    /// Sets the root namespace and returns the modified builder.
    pub fn with_root(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_root(value);
        self
    }

    /// Sets the timeout applied to every request.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Ok(Some(value));
    }

    /// Sets the timeout and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    fn user_agent(&self) -> String {
        if self.client_identifier.is_empty() {
            crate::USER_AGENT.to_string()
        } else {
            format!("{} {}", self.client_identifier, crate::USER_AGENT)
        }
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialsMissing`] if no credentials were set.
    /// Returns [`Error::InvalidRoot`] if the root is not recognized.
    /// Returns [`Error::InvalidTimeout`] if the timeout from the environment is not a number.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let root = self.root.parse::<crate::Root>()?;
        let timeout = self.timeout.clone().map_err(Error::InvalidTimeout)?;
        let user_agent = self.user_agent();
        let mut builder = self.client_builder.unwrap_or_default().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(crate::Client {
            api_url: self.api_url,
            content_url: self.content_url,
            credentials: self.credentials.ok_or(Error::CredentialsMissing)?,
            root,
            locale: self.locale,
            inner: builder.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error};
    use crate::{Credentials, Root};

    #[test]
    fn should_map_app_folder_to_sandbox() {
        let client = ClientBuilder::default()
            .with_credentials(Credentials::access_token("token"))
            .with_root("app_folder")
            .build()
            .unwrap();
        assert_eq!(client.root(), Root::Sandbox);
        assert_eq!(client.root().as_str(), "sandbox");
    }

    #[test]
    fn should_default_to_auto() {
        let client = ClientBuilder::default()
            .with_credentials(Credentials::access_token("token"))
            .build()
            .unwrap();
        assert_eq!(client.root(), Root::Auto);
    }

    #[test]
    fn should_reject_unknown_root() {
        let err = ClientBuilder::default()
            .with_credentials(Credentials::access_token("token"))
            .with_root("other")
            .build()
            .unwrap_err();
        match err {
            Error::InvalidRoot(inner) => assert_eq!(inner.value(), "other"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn should_require_credentials() {
        let err = ClientBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::CredentialsMissing));
    }

    #[test]
    fn should_prefix_user_agent_with_identifier() {
        let builder = ClientBuilder::default().with_client_identifier("my-app/1.0");
        assert_eq!(
            builder.user_agent(),
            format!("my-app/1.0 {}", crate::USER_AGENT)
        );
        assert_eq!(ClientBuilder::default().user_agent(), crate::USER_AGENT);
    }

    #[test]
    fn should_use_base_url_for_both_servers() {
        let client = ClientBuilder::default()
            .with_credentials(Credentials::access_token("token"))
            .with_base_url("http://localhost:1234")
            .build()
            .unwrap();
        assert_eq!(client.server_url(crate::Server::Api), "http://localhost:1234");
        assert_eq!(
            client.server_url(crate::Server::Content),
            "http://localhost:1234"
        );
    }
}
