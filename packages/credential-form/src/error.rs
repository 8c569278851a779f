/// The ways an outbound submission can fail.
///
/// The controller never acts on these beyond logging them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// A header from the request options is not a valid HTTP header.
    #[error("invalid request header `{name}`")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The request could not be built or did not reach the server.
    #[error("error reaching {url}: {message}")]
    Request {
        /// The target of the request.
        url: String,
        /// The underlying client error.
        message: String,
    },

    /// The server answered with a status outside of `200..300`.
    #[error("server responded with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("error reading response body: {0}")]
    Body(String),
}

/// Errors raised while loading a [`SubmitConfig`](crate::SubmitConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration is not valid TOML or has fields of the wrong type.
    #[error("failed to parse submit config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The submit URL is empty.
    #[error("submit config has an empty `url`")]
    EmptyUrl,
}
