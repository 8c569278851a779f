use crate::{MultipartPayload, RequestOptions, TransportError};
use async_trait::async_trait;

/// The HTTP client the form submits through.
///
/// Futures returned by a transport are not required to be `Send`. On the web everything
/// runs on the single UI thread, and the browser fetch futures are `!Send` anyway.
#[async_trait(?Send)]
pub trait Transport {
    /// Post `payload` to `url`, sending the headers in `options`.
    ///
    /// The transport owns timeouts, retries and connection handling.
    async fn post(
        &self,
        url: &str,
        payload: MultipartPayload,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}

/// A completed response, kept exactly as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,

    /// Response headers in the order they were received.
    pub headers: Vec<(String, String)>,

    /// The response body as text.
    pub body: String,
}
