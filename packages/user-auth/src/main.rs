//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    dioxus::LaunchBuilder::new()
        .with_context(user_auth::load_config())
        .launch(user_auth::UserAuth);
}
