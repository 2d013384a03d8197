use dropbox::builder::{ClientBuilder, Error};
use dropbox::{Client, Credentials};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Configuration file, layered over the environment variables
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    access_token: Option<String>,
    client_identifier: Option<String>,
    root: Option<String>,
    locale: Option<String>,
    /// In seconds
    timeout: Option<u64>,
}

impl Config {
    /// Loads the configuration, a missing file being an empty configuration.
    pub(crate) fn from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("no config file found at {path:?}");
            return Ok(Self::default());
        }
        let reader = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(reader)?)
    }

    fn builder(self) -> ClientBuilder {
        let mut builder = ClientBuilder::from_env()
            .with_client_identifier(concat!("dropbox-cli/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = self.access_token {
            builder.set_credentials(Credentials::access_token(token));
        }
        if let Some(value) = self.client_identifier {
            builder.set_client_identifier(value);
        }
        if let Some(value) = self.root {
            builder.set_root(value);
        }
        if let Some(value) = self.locale {
            builder.set_locale(value);
        }
        if let Some(value) = self.timeout.map(Duration::from_secs) {
            builder.set_timeout(value);
        }
        builder
    }

    pub(crate) fn build(self) -> Result<Client, Error> {
        self.builder().build()
    }
}
