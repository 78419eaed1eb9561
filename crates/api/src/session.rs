use dyn_clone::DynClone;

/// Where the bearer token comes from. Injected into the client so tests and
/// alternative frontends can supply their own storage.
pub trait Session: Send + Sync + DynClone {
    fn bearer_token(&self) -> Option<String>;
}

dyn_clone::clone_trait_object!(Session);

/// A session with a fixed token (or none at all, for login/registration).
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }
}

impl Session for StaticSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
