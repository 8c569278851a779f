#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod config;
mod controller;
mod error;
mod payload;
mod reqwest_transport;
mod state;
mod transport;

pub use crate::config::{DEFAULT_CONTENT_TYPE, DEFAULT_SUBMIT_URL, SubmitConfig};
pub use crate::controller::{CredentialFormController, SubmitEvent, Submission};
pub use crate::error::{ConfigError, TransportError};
pub use crate::payload::{MultipartPayload, RequestOptions};
pub use crate::reqwest_transport::ReqwestTransport;
pub use crate::state::FormState;
pub use crate::transport::{Transport, TransportResponse};
