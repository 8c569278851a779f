/// The state held by the credential form.
///
/// Only the username is tracked. The password control is rendered but its value is
/// never captured here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FormState {
    username: String,
}

impl FormState {
    /// Create a new, empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently delivered username value.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn set_username(&mut self, username: String) {
        self.username = username;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = FormState::new();
        assert_eq!(state.username(), "");
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn set_replaces_value() {
        let mut state = FormState::new();
        state.set_username("first".to_string());
        state.set_username(String::new());
        assert_eq!(state.username(), "");
    }
}
