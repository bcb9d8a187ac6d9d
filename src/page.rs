//! Navigation outcomes produced by page loaders.
//!
//! A loader either yields props for the requested render, tells the caller to
//! send the client somewhere else, or reports that the page does not exist.
//! The HTTP mapping follows the framework convention: props serialize to a
//! JSON body, redirects use 307 (non-permanent) or 308 (permanent) so the
//! client preserves the request method, and not-found renders 404.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Redirect instruction: where to send the client instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub destination: String,
    pub permanent: bool,
}

impl Redirect {
    /// Non-permanent redirect to `destination`.
    #[must_use]
    pub fn temporary(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            permanent: false,
        }
    }

    /// Permanent redirect to `destination`.
    #[must_use]
    pub fn permanent(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            permanent: true,
        }
    }
}

/// Outcome of a page data loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult<P> {
    /// Props for the requested page render.
    Props(P),
    /// Send the client elsewhere instead of rendering.
    Redirect(Redirect),
    /// The requested page does not exist.
    NotFound,
}

impl<P> PageResult<P> {
    /// True when the outcome carries props rather than a navigation change.
    #[must_use]
    pub fn is_props(&self) -> bool {
        matches!(self, Self::Props(_))
    }
}

impl<P: Serialize> IntoResponse for PageResult<P> {
    fn into_response(self) -> Response {
        match self {
            Self::Props(props) => (StatusCode::OK, Json(props)).into_response(),
            Self::Redirect(redirect) => {
                let status = if redirect.permanent {
                    StatusCode::PERMANENT_REDIRECT
                } else {
                    StatusCode::TEMPORARY_REDIRECT
                };
                (status, [(LOCATION, redirect.destination)]).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
