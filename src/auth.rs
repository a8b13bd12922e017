//! Caller identity and the authentication gate.
//!
//! Reads are public; every mutation is gated by an injected
//! [`Authenticator`]. The gate is a plain boolean capability check, so any
//! session mechanism (or a closure in tests) can stand behind it.

use std::fmt;

/// Who is making a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Caller {
    #[default]
    Anonymous,
    User {
        username: String,
    },
}

impl Caller {
    pub fn user(username: impl Into<String>) -> Self {
        Caller::User {
            username: username.into(),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Caller::Anonymous => None,
            Caller::User { username } => Some(username),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caller::Anonymous => f.write_str("anonymous"),
            Caller::User { username } => f.write_str(username),
        }
    }
}

/// `IsAuthenticated(caller) -> bool`.
pub trait Authenticator: Send + Sync {
    fn is_authenticated(&self, caller: &Caller) -> bool;
}

impl<F> Authenticator for F
where
    F: Fn(&Caller) -> bool + Send + Sync,
{
    fn is_authenticated(&self, caller: &Caller) -> bool {
        self(caller)
    }
}

/// Accepts any logged-in user with a non-blank username.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAuthenticator;

impl Authenticator for SessionAuthenticator {
    fn is_authenticated(&self, caller: &Caller) -> bool {
        caller
            .username()
            .is_some_and(|name| !name.trim().is_empty())
    }
}
