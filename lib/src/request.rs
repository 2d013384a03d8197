//! The session layer: authenticated calls to the Dropbox servers and parsing of their responses.

use reqwest::StatusCode;

use crate::{Error, Server};

/// Body of the responses with a non successful status
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: serde_json::Value,
    user_error: Option<String>,
}

impl ErrorBody {
    fn into_error(self, status: u16) -> Error {
        let error = match self.error {
            serde_json::Value::String(inner) => inner,
            other => other.to_string(),
        };
        Error::Api {
            status,
            error,
            user_error: self.user_error,
        }
    }
}

/// Converts the non successful responses into errors.
async fn check_response(res: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Auth);
    }
    if status == StatusCode::NOT_MODIFIED {
        return Err(Error::NotModified);
    }
    let body = res.text().await?;
    if status.is_server_error() {
        return Err(Error::Server {
            status: status.as_u16(),
            body,
        });
    }
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(inner) => Err(inner.into_error(status.as_u16())),
        Err(_) => Err(Error::Server {
            status: status.as_u16(),
            body,
        }),
    }
}

/// Deserializes the body of a successful response.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    res: reqwest::Response,
) -> Result<T, Error> {
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::from)
}

/// Reads the raw body of a successful response.
pub(crate) async fn read_binary(res: reqwest::Response) -> Result<bytes::Bytes, Error> {
    res.bytes().await.map_err(Error::from)
}

impl crate::Client {
    fn build_url(&self, server: Server, path: &str) -> String {
        format!("{}{}", self.server_url(server), path)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<P: serde::Serialize>(
        &self,
        server: Server,
        path: &str,
        params: P,
    ) -> Result<reqwest::Response, Error> {
        let uri = self.build_url(server, path);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .get(uri)
            .bearer_auth(self.credentials.token())
            .query(&WithLocale {
                locale: self.locale.as_deref(),
                inner: params,
            })
            .send()
            .await?;
        check_response(res).await
    }

    #[tracing::instrument(name = "put", skip(self, params, payload))]
    pub(crate) async fn put_request<P: serde::Serialize>(
        &self,
        server: Server,
        path: &str,
        params: P,
        payload: reqwest::Body,
    ) -> Result<reqwest::Response, Error> {
        let uri = self.build_url(server, path);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .put(uri)
            .bearer_auth(self.credentials.token())
            .query(&WithLocale {
                locale: self.locale.as_deref(),
                inner: params,
            })
            .body(payload)
            .send()
            .await?;
        check_response(res).await
    }
}

#[derive(serde::Serialize)]
struct WithLocale<'a, I> {
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
    #[serde(flatten)]
    inner: I,
}

/// Parameters of the calls that don't take any
#[derive(Debug, Default, serde::Serialize)]
pub(crate) struct NoParams {}
