use std::borrow::Cow;

use crate::entry::Entry;
use crate::Server;

/// Parameters when retrieving the metadata of a file or folder
///
/// Every parameter left unset is omitted from the request and the server default applies.
#[derive(Debug, Default, serde::Serialize)]
pub struct MetadataParams<'a> {
    /// Maximum number of files in a folder listing, 10,000 by default and up to 25,000.
    /// Bigger folders are refused with a `406` status.
    #[serde(skip_serializing_if = "Option::is_none")]
    file_limit: Option<u32>,
    /// Hash of a previous listing. The call fails with [`crate::Error::NotModified`] if the folder didn't change.
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<Cow<'a, str>>,
    /// Whether the folder contents should be listed, `true` by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    list: Option<bool>,
    /// Whether the listing should include the deleted children.
    #[serde(skip_serializing_if = "Option::is_none")]
    include_deleted: Option<bool>,
    /// Only return the metadata of this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    rev: Option<Cow<'a, str>>,
    /// Whether photos and videos should include their media info.
    #[serde(skip_serializing_if = "Option::is_none")]
    include_media_info: Option<bool>,
}

impl<'a> MetadataParams<'a> {
    pub fn set_file_limit(&mut self, value: u32) {
        self.file_limit = Some(value);
    }

    pub fn with_file_limit(mut self, value: u32) -> Self {
        self.set_file_limit(value);
        self
    }

    pub fn set_hash(&mut self, value: impl Into<Cow<'a, str>>) {
        self.hash = Some(value.into());
    }

    pub fn with_hash(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_hash(value);
        self
    }

    pub fn set_list(&mut self, value: bool) {
        self.list = Some(value);
    }

    pub fn with_list(mut self, value: bool) -> Self {
        self.set_list(value);
        self
    }

    pub fn set_include_deleted(&mut self, value: bool) {
        self.include_deleted = Some(value);
    }

    pub fn with_include_deleted(mut self, value: bool) -> Self {
        self.set_include_deleted(value);
        self
    }

    pub fn set_rev(&mut self, value: impl Into<Cow<'a, str>>) {
        self.rev = Some(value.into());
    }

    pub fn with_rev(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_rev(value);
        self
    }

    pub fn set_include_media_info(&mut self, value: bool) {
        self.include_media_info = Some(value);
    }

    pub fn with_include_media_info(mut self, value: bool) -> Self {
        self.set_include_media_info(value);
        self
    }
}

impl crate::Client {
    /// Retrieves the metadata of a file or a folder, with the folder contents.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropbox::Client) -> Result<(), dropbox::Error> {
    /// let entry = client.metadata("/Photos").await?;
    /// if let Some(folder) = entry.as_folder() {
    ///     for child in folder.contents.iter().flatten() {
    ///         println!("{}", child.base().path);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn metadata(&self, path: &str) -> crate::Result<Entry> {
        self.metadata_with_params(path, MetadataParams::default())
            .await
    }

    /// Retrieves the metadata of a file or a folder using the given parameters.
    pub async fn metadata_with_params(
        &self,
        path: &str,
        params: MetadataParams<'_>,
    ) -> crate::Result<Entry> {
        let method = crate::path::method_path("metadata", self.root, path);
        let res = self.get_request(Server::Api, &method, params).await?;
        crate::request::read_json(res).await
    }
}
