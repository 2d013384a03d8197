use std::borrow::Cow;

use crate::entry::File;
use crate::Server;

/// Parameters of a file upload
#[derive(Debug, Default, serde::Serialize)]
pub struct PutFileParams<'a> {
    /// Whether an existing file at the same path is replaced (`true`, the server default)
    /// or the new file gets renamed, like `test (1).txt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
    /// Revision of the file being edited. When it's not the latest one,
    /// the new file gets renamed, like `test (conflicted copy).txt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_rev: Option<Cow<'a, str>>,
}

impl<'a> PutFileParams<'a> {
    pub fn set_overwrite(&mut self, value: bool) {
        self.overwrite = Some(value);
    }

    pub fn with_overwrite(mut self, value: bool) -> Self {
        self.set_overwrite(value);
        self
    }

    pub fn set_parent_rev(&mut self, value: impl Into<Cow<'a, str>>) {
        self.parent_rev = Some(value.into());
    }

    pub fn with_parent_rev(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_parent_rev(value);
        self
    }
}

impl crate::Client {
    /// Uploads a file using PUT semantics.
    ///
    /// The call goes to the content server and `path` should not point to a folder.
    ///
    /// # Returns
    ///
    /// The metadata of the stored [`File`]. Its path may differ from the requested one
    /// when the file got renamed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &dropbox::Client) -> Result<(), dropbox::Error> {
    /// let file = client.put_file("/Documents/notes.txt", "Hello World").await?;
    /// println!("stored at {} with rev {:?}", file.base.path, file.base.rev);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn put_file(
        &self,
        path: &str,
        data: impl Into<reqwest::Body>,
    ) -> crate::Result<File> {
        self.put_file_with_params(path, PutFileParams::default(), data)
            .await
    }

    /// Uploads a file using the given parameters.
    pub async fn put_file_with_params(
        &self,
        path: &str,
        params: PutFileParams<'_>,
        data: impl Into<reqwest::Body>,
    ) -> crate::Result<File> {
        let method = crate::path::method_path("files_put", self.root, path);
        let res = self
            .put_request(Server::Content, &method, params, data.into())
            .await?;
        crate::request::read_json(res).await
    }
}

#[cfg(test)]
mod tests {
    use super::PutFileParams;
    use mockito::Matcher;

    const RESPONSE: &str = r#"{
    "size": "11 bytes",
    "rev": "1f33043551f",
    "thumb_exists": false,
    "bytes": 11,
    "modified": "Wed, 10 Aug 2011 18:21:30 +0000",
    "path": "/Documents/notes (1).txt",
    "is_dir": false,
    "icon": "page_white_text",
    "root": "dropbox",
    "mime_type": "text/plain",
    "revision": 496342
}"#;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/files_put/auto/Documents/notes.txt")
            .match_query(Matcher::Missing)
            .match_header("authorization", "Bearer access-token")
            .match_body("Hello World")
            .with_status(200)
            .with_body(RESPONSE)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let result = client
            .put_file("Documents//notes.txt/", "Hello World")
            .await
            .unwrap();
        assert_eq!(result.base.path, "/Documents/notes (1).txt");
        assert_eq!(result.base.rev.as_deref(), Some("1f33043551f"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn success_with_params() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/files_put/auto/Documents/notes.txt")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("overwrite".into(), "false".into()),
                Matcher::UrlEncoded("parent_rev".into(), "1f33043551e".into()),
            ]))
            .match_body("updated content")
            .with_status(200)
            .with_body(RESPONSE)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let params = PutFileParams::default()
            .with_overwrite(false)
            .with_parent_rev("1f33043551e");
        let result = client
            .put_file_with_params("/Documents/notes.txt", params, b"updated content".to_vec())
            .await
            .unwrap();
        assert_eq!(result.base.bytes, 11);
        m.assert_async().await;
    }
}
