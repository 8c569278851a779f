use crate::{FormState, MultipartPayload, SubmitConfig, Transport, TransportResponse};
use std::{
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};
use tracing::{debug, info, trace, warn};

/// A form submission event whose default browser behavior can be suppressed.
pub trait SubmitEvent {
    /// Stop the browser from performing its own form submission.
    fn prevent_default(&self);
}

/// Bridges user input to a single in-memory field and to one outbound request per submit.
///
/// The controller is renderer agnostic. A renderer forwards every change of the username
/// control to [`on_field_change`](Self::on_field_change), reads [`username`](Self::username)
/// back for the next paint, and forwards the form's submit event to
/// [`on_submit`](Self::on_submit).
pub struct CredentialFormController<T> {
    state: FormState,
    transport: Rc<T>,
    config: SubmitConfig,
}

impl<T: Transport + 'static> CredentialFormController<T> {
    /// Create a controller with an empty username.
    pub fn new(transport: T, config: SubmitConfig) -> Self {
        Self {
            state: FormState::new(),
            transport: Rc::new(transport),
            config,
        }
    }

    /// The current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The current username.
    pub fn username(&self) -> &str {
        self.state.username()
    }

    /// The submit target.
    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    /// Replace the username with the latest value of the input control.
    ///
    /// Every string is accepted as-is.
    pub fn on_field_change(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        trace!(len = new_value.len(), "username changed");
        self.state.set_username(new_value);
    }

    /// The payload a submission made right now would carry.
    ///
    /// Only the username is included. The password is never captured.
    pub fn payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload.append("username", self.state.username());
        payload
    }

    /// Handle a form submission.
    ///
    /// The event's default behavior is prevented before anything else happens, and the
    /// payload is captured from the current state. The returned future posts that payload
    /// and logs the response. It has no result: failures are not retried, not surfaced,
    /// and leave the form untouched.
    ///
    /// Each call produces an independent request. Nothing is de-duplicated or cancelled,
    /// and later edits to the form do not affect a submission already made.
    pub fn on_submit(&self, event: &impl SubmitEvent) -> Submission {
        event.prevent_default();

        let transport = Rc::clone(&self.transport);
        let payload = self.payload();
        let options = self.config.request_options();
        let url = self.config.url.clone();

        debug!(%url, "dispatching credential form submission");

        Submission {
            inner: Box::pin(async move {
                match transport.post(&url, payload, options).await {
                    Ok(response) => observe(&response),
                    Err(err) => warn!(%url, "unhandled credential form submission failure: {err}"),
                }
            }),
        }
    }
}

/// An in-flight form submission, created by [`CredentialFormController::on_submit`].
///
/// The request is sent when the submission is first polled. Renderers usually spawn it
/// on their executor and forget about it.
#[must_use = "a submission does nothing unless it is polled"]
pub struct Submission {
    inner: Pin<Box<dyn Future<Output = ()>>>,
}

impl Future for Submission {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.inner.as_mut().poll(cx)
    }
}

fn observe(response: &TransportResponse) {
    info!(status = response.status, headers = ?response.headers, "credential form response");
    info!(body = %response.body, "credential form response body");
}
