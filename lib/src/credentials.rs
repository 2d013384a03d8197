//! The OAuth 2 access token used to authenticate with the Dropbox API.
//!
//! Acquiring the token is out of the scope of this crate.

/// Credentials sent as `Authorization: Bearer` header with every request
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("access_token", &"********")
            .finish()
    }
}

impl Credentials {
    /// Creates a credential based on the environment variables
    ///
    /// When `DROPBOX_ACCESS_TOKEN` is set, a `Some(Credentials)` will be created,
    /// otherwise `None` is returned.
    ///
    /// ```rust
    /// use dropbox::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an access token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("DROPBOX_ACCESS_TOKEN")
            .ok()
            .map(Self::access_token)
    }

    pub fn access_token<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub(crate) fn token(&self) -> &str {
        self.access_token.as_str()
    }
}
