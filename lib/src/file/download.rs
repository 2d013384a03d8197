use std::borrow::Cow;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::entry::File;
use crate::{Error, Server};

/// Name of the response header carrying the metadata of a downloaded file
pub const METADATA_HEADER: &str = "x-dropbox-metadata";

/// Parameters of a file download
#[derive(Debug, Default, serde::Serialize)]
pub struct GetFileParams<'a> {
    /// Revision of the file to retrieve, the latest one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    rev: Option<Cow<'a, str>>,
}

impl<'a> GetFileParams<'a> {
    pub fn set_rev(&mut self, value: impl Into<Cow<'a, str>>) {
        self.rev = Some(value.into());
    }

    pub fn with_rev(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_rev(value);
        self
    }
}

/// A downloaded file: its content and the metadata sent along
#[derive(Debug)]
pub struct Download {
    pub content: Bytes,
    /// Raw mapping read from the metadata header
    pub metadata: Map<String, Value>,
}

impl Download {
    /// Builds the typed metadata of the downloaded file.
    pub fn entry(&self) -> crate::Result<File> {
        serde_json::from_value(Value::Object(self.metadata.clone())).map_err(Error::from)
    }
}

/// Extracts the file metadata from the headers of a download response.
fn parse_metadata(res: &reqwest::Response) -> crate::Result<Map<String, Value>> {
    let status = res.status().as_u16();
    let raw = res
        .headers()
        .get(METADATA_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    let parsed = raw.as_deref().map(serde_json::from_str::<Value>);
    match parsed {
        Some(Ok(Value::Object(inner))) => Ok(inner),
        _ => {
            tracing::warn!("invalid metadata header {raw:?}");
            Err(Error::Metadata {
                raw,
                status,
                headers: res.headers().clone(),
            })
        }
    }
}

impl crate::Client {
    /// Downloads the latest revision of a file.
    ///
    /// The call goes to the content server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Metadata`] if the response doesn't carry a valid metadata header,
    /// otherwise a [`crate::Error`] if the request fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropbox::Client) -> Result<(), dropbox::Error> {
    /// let download = client.get_file("/Documents/notes.txt").await?;
    /// println!("{} bytes, rev {:?}", download.content.len(), download.metadata.get("rev"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_file(&self, path: &str) -> crate::Result<Download> {
        self.get_file_with_params(path, GetFileParams::default())
            .await
    }

    /// Downloads a file using the given parameters.
    pub async fn get_file_with_params(
        &self,
        path: &str,
        params: GetFileParams<'_>,
    ) -> crate::Result<Download> {
        let method = crate::path::method_path("files", self.root, path);
        let res = self.get_request(Server::Content, &method, params).await?;
        let metadata = parse_metadata(&res)?;
        let content = crate::request::read_binary(res).await?;
        Ok(Download { content, metadata })
    }
}
