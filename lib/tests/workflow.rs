mod common;

use dropbox::builder::ClientBuilder;
use dropbox::metadata::MetadataParams;
use dropbox::{Credentials, Error};
use mockito::Matcher;
use rand::distributions::Alphanumeric;
use rand::Rng;

fn random_content(size: usize) -> Vec<u8> {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .collect()
}

#[tokio::test]
async fn upload_then_download_through_content_server() {
    common::init();
    let mut api = mockito::Server::new_async().await;
    let mut content = mockito::Server::new_async().await;

    let payload = random_content(1024);
    let metadata = common::metadata("/Notes/today.txt", payload.len(), "2a0029684fe");

    let upload = content
        .mock("PUT", "/files_put/dropbox/Notes/today.txt")
        .match_header("authorization", "Bearer token")
        .match_query(Matcher::UrlEncoded("overwrite".into(), "true".into()))
        .match_body(Matcher::Exact(String::from_utf8(payload.clone()).unwrap()))
        .with_status(200)
        .with_body(&metadata)
        .create_async()
        .await;
    let lookup = api
        .mock("GET", "/metadata/dropbox/Notes/today.txt")
        .match_query(Matcher::UrlEncoded("list".into(), "false".into()))
        .with_status(200)
        .with_body(&metadata)
        .create_async()
        .await;
    let download = content
        .mock("GET", "/files/dropbox/Notes/today.txt")
        .match_query(Matcher::UrlEncoded("rev".into(), "2a0029684fe".into()))
        .with_status(200)
        .with_header("x-dropbox-metadata", &metadata)
        .with_body(payload.clone())
        .create_async()
        .await;

    let client = ClientBuilder::default()
        .with_api_url(api.url())
        .with_content_url(content.url())
        .with_credentials(Credentials::access_token("token"))
        .with_client_identifier("workflow-test")
        .with_root("dropbox")
        .build()
        .unwrap();

    let params = dropbox::file::upload::PutFileParams::default().with_overwrite(true);
    let stored = client
        .put_file_with_params("Notes/today.txt", params, payload.clone())
        .await
        .unwrap();
    let rev = stored.base.rev.clone().unwrap();

    let entry = client
        .metadata_with_params("/Notes/today.txt", MetadataParams::default().with_list(false))
        .await
        .unwrap();
    assert!(entry.is_file());
    assert_eq!(entry.base().rev.as_deref(), Some(rev.as_str()));

    let params = dropbox::file::download::GetFileParams::default().with_rev(rev.as_str());
    let result = client
        .get_file_with_params("/Notes/today.txt", params)
        .await
        .unwrap();
    assert_eq!(result.content.to_vec(), payload);
    assert_eq!(result.entry().unwrap().base.path, "/Notes/today.txt");

    upload.assert_async().await;
    lookup.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn metadata_header_is_required() {
    common::init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/files/auto/today.txt")
        .with_status(200)
        .with_header("x-dropbox-metadata", "[1, 2, 3]")
        .with_body("content")
        .create_async()
        .await;
    let client = ClientBuilder::default()
        .with_base_url(server.url())
        .with_credentials(Credentials::access_token("token"))
        .build()
        .unwrap();
    let err = client.get_file("today.txt").await.unwrap_err();
    match err {
        Error::Metadata {
            raw,
            status,
            headers,
        } => {
            assert_eq!(raw.as_deref(), Some("[1, 2, 3]"));
            assert_eq!(status, 200);
            assert!(headers.contains_key("x-dropbox-metadata"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    m.assert_async().await;
}

#[tokio::test]
async fn expired_token() {
    common::init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/account/info")
        .with_status(401)
        .with_body(r#"{"error": "The given OAuth 2 access token doesn't exist or has expired."}"#)
        .create_async()
        .await;
    let client = ClientBuilder::default()
        .with_base_url(server.url())
        .with_credentials(Credentials::access_token("expired"))
        .build()
        .unwrap();
    let err = client.account_info().await.unwrap_err();
    assert!(matches!(err, Error::Auth));
    assert_eq!(err.status(), Some(401));
    m.assert_async().await;
}

#[test]
fn invalid_root() {
    let err = dropbox::Client::new(Credentials::access_token("token"), "", "other").unwrap_err();
    assert!(matches!(err, dropbox::builder::Error::InvalidRoot(_)));
    let client = dropbox::Client::new(Credentials::access_token("token"), "", "app_folder").unwrap();
    assert_eq!(client.root(), dropbox::Root::Sandbox);
}
