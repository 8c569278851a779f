use async_trait::async_trait;
use credential_form::{
    CredentialFormController, MultipartPayload, RequestOptions, SubmitConfig, SubmitEvent,
    Transport, TransportError, TransportResponse,
};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use std::{
    cell::{Cell, RefCell},
    time::Duration,
};
use user_auth::{bound_login_form, handle_submit, handle_username_input};

thread_local! {
    static POSTED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static PREVENTED: Cell<usize> = const { Cell::new(0) };
}

/// Remembers the username of every post in `POSTED`.
struct Recording;

#[async_trait(?Send)]
impl Transport for Recording {
    async fn post(
        &self,
        _url: &str,
        payload: MultipartPayload,
        _options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let username = payload.get("username").unwrap_or_default().to_string();
        POSTED.with(|posted| posted.borrow_mut().push(username));
        Ok(TransportResponse::default())
    }
}

struct CountingSubmit;

impl SubmitEvent for CountingSubmit {
    fn prevent_default(&self) {
        PREVENTED.with(|count| count.set(count.get() + 1));
    }
}

fn use_recording_form() -> Signal<CredentialFormController<Recording>> {
    use_signal(|| CredentialFormController::new(Recording, SubmitConfig::default()))
}

#[test]
fn input_is_shown_by_the_username_control() {
    fn app() -> Element {
        let form = use_recording_form();
        use_hook(|| handle_username_input(form, "bob".to_string()));
        bound_login_form(form)
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"value="bob""#), "{html}");
}

#[test]
fn latest_input_wins() {
    fn app() -> Element {
        let form = use_recording_form();
        use_hook(|| {
            handle_username_input(form, "alice".to_string());
            handle_username_input(form, "carol".to_string());
        });
        bound_login_form(form)
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"value="carol""#), "{html}");
    assert!(!html.contains(r#"value="alice""#), "{html}");
}

#[tokio::test]
async fn submit_prevents_default_and_posts_the_current_username() {
    fn app() -> Element {
        let form = use_recording_form();
        use_hook(|| {
            handle_username_input(form, "bob".to_string());
            handle_submit(form, &CountingSubmit);
        });
        bound_login_form(form)
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert_eq!(PREVENTED.with(Cell::get), 1);

    // the spawned submission never marks anything dirty, so this only drives the task
    let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;

    assert_eq!(POSTED.with(|posted| posted.borrow().clone()), vec!["bob"]);
    assert_eq!(PREVENTED.with(Cell::get), 1);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"value="bob""#), "{html}");
}
