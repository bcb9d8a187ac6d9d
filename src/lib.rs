//! # SSR Guard
//!
//! `ssr-guard` wraps a page's server-side data loader with session checks so
//! unauthenticated or under-privileged requests never reach it.
//!
//! ## Request Flow
//!
//! - **Authentication:** the session token is read from the `nextauth.token`
//!   cookie. Requests without it are redirected to the sign-in page before
//!   any other work runs, whether or not an access requirement was supplied.
//! - **Authorization:** when an [`AccessRequirement`] was supplied at wrap
//!   time, the token's `permissions`/`roles` claims are decoded (without
//!   signature verification; the issuer owns that) and evaluated. Sessions
//!   that fall short are redirected to the dashboard.
//! - **Delegation:** the wrapped loader runs and its outcome (props, a
//!   redirect, or not-found) is returned untouched.
//! - **Recovery:** a loader failing with [`LoaderError::InvalidSession`] has
//!   both session cookies cleared and the client redirected to sign-in.
//!   Every other fault propagates to the caller.
//!
//! ## Testability
//!
//! Cookie I/O sits behind the [`CookieStore`] trait, so the whole flow runs
//! against an in-memory store in tests; [`RequestCookies`] is the
//! header-backed implementation for real requests.

mod access;
mod cookies;
mod error;
mod guard;
mod page;
mod token;

pub use access::AccessRequirement;
pub use cookies::{CookieStore, RequestCookies};
pub use error::LoaderError;
pub use guard::{
    with_ssr_auth, LoaderFuture, PageLoader, SsrAuth, REFRESH_TOKEN_COOKIE, SESSION_TOKEN_COOKIE,
};
pub use page::{PageResult, Redirect};
pub use token::{decode_unverified, SessionClaims, TokenError};
