//! Fault taxonomy for page loaders.

use thiserror::Error;

use crate::token::TokenError;

/// Faults a page loader, or the guard wrapping it, can raise.
///
/// The guard recovers `InvalidSession` on its own (cookies cleared, redirect
/// to sign-in); everything else crosses the guard untouched.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The session token was rejected deeper in the stack.
    #[error("session token rejected")]
    InvalidSession,
    /// The session token could not be decoded during the access check.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// Any other loader failure; its recovery is owned by the caller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
