//! The login form of the chat frontend.
//!
//! [`UserAuth`] owns a [`CredentialFormController`] in a signal and wires the browser
//! events of [`LoginForm`] into it. [`LoginForm`] itself only draws what it is given.

use credential_form::{
    CredentialFormController, ReqwestTransport, SubmitConfig, SubmitEvent, Transport,
};
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::warn;

/// The submit config compiled into the app.
pub const EMBEDDED_CONFIG: &str = include_str!("../UserAuth.toml");

/// Parse [`EMBEDDED_CONFIG`], falling back to the default target if it is invalid.
pub fn load_config() -> SubmitConfig {
    match SubmitConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}, using the default submit target");
            SubmitConfig::default()
        }
    }
}

/// Lets the controller suppress the browser's own form submission.
struct FormSubmit<'a>(&'a FormEvent);

impl SubmitEvent for FormSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// The stateful login form.
///
/// The submit target is read from a [`SubmitConfig`] context when one is provided.
#[component]
pub fn UserAuth() -> Element {
    let config = try_use_context::<SubmitConfig>().unwrap_or_default();
    let form =
        use_signal(move || CredentialFormController::new(ReqwestTransport::default(), config));

    bound_login_form(form)
}

/// A [`LoginForm`] that shows the username held by `form` and forwards its events to it.
pub fn bound_login_form<T: Transport + 'static>(
    form: Signal<CredentialFormController<T>>,
) -> Element {
    rsx! {
        LoginForm {
            username: form.read().username().to_string(),
            oninput: move |value: String| handle_username_input(form, value),
            onsubmit: move |evt: FormEvent| {
                handle_submit(form, &FormSubmit(&evt));
            },
        }
    }
}

/// Store the latest value of the username input.
///
/// Writing through the signal re-renders every component that reads the username.
pub fn handle_username_input<T: Transport + 'static>(
    mut form: Signal<CredentialFormController<T>>,
    value: String,
) {
    form.write().on_field_change(value);
}

/// Submit the form and spawn the request on the current scope.
///
/// The returned task is never awaited by the form itself.
pub fn handle_submit<T: Transport + 'static>(
    form: Signal<CredentialFormController<T>>,
    event: &impl SubmitEvent,
) -> Task {
    let submission = form.read().on_submit(event);
    spawn(submission)
}

/// Draws the username and password inputs and the login button.
///
/// The username input always shows `username`. The password input is not bound to
/// anything and its value is never read.
#[component]
pub fn LoginForm(
    username: String,
    oninput: EventHandler<String>,
    onsubmit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "UserAuth",
            form { class: "login", onsubmit: move |evt| onsubmit.call(evt),
                div { class: "form-group",
                    label { "for": "username", "Username" }
                    input {
                        class: "form-control",
                        r#type: "username",
                        name: "username",
                        id: "username",
                        placeholder: "Enter username",
                        value: "{username}",
                        oninput: move |evt| oninput.call(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "for": "examplePassword", "Password" }
                    input {
                        class: "form-control",
                        r#type: "password",
                        name: "password",
                        id: "examplePassword",
                        placeholder: "Enter password",
                    }
                }
                button { class: "btn btn-secondary", id: "login-button", "Login" }
            }
        }
    }
}
