use crate::{MultipartPayload, RequestOptions, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};

/// A [`Transport`] backed by a [`reqwest::Client`].
///
/// The payload is always encoded as `multipart/form-data`. Headers from the request
/// options are applied afterwards and replace the ones reqwest derived from the body,
/// so a declared `Content-Type` wins over the multipart one.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport that sends requests through `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the request [`Transport::post`] would send, without sending it.
    pub fn build_request(
        &self,
        url: &str,
        payload: MultipartPayload,
        options: &RequestOptions,
    ) -> Result<reqwest::Request, TransportError> {
        let mut request = self
            .client
            .post(url)
            .multipart(payload.into())
            .build()
            .map_err(|err| TransportError::Request {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        for (name, value) in options.headers() {
            let invalid = || TransportError::InvalidHeader {
                name: name.to_string(),
            };
            let header = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            request.headers_mut().insert(header, value);
        }

        Ok(request)
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        payload: MultipartPayload,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let request = self.build_request(url, payload, &options)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| TransportError::Request {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;

        Ok(TransportResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
