//! Session guard decorating page data loaders.
//!
//! Flow Overview:
//! 1) Resolve the session token from request cookies; a missing token
//!    redirects to the sign-in page before any other work runs.
//! 2) When an access requirement was supplied, decode the token's claims and
//!    redirect under-privileged sessions to the dashboard.
//! 3) Delegate to the wrapped loader and hand its outcome back untouched.
//! 4) Recover the invalid-session fault by clearing both session cookies and
//!    redirecting to the sign-in page; every other fault propagates.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::{
    access::AccessRequirement,
    cookies::CookieStore,
    error::LoaderError,
    page::{PageResult, Redirect},
    token::decode_unverified,
};

/// Cookie holding the session token.
pub const SESSION_TOKEN_COOKIE: &str = "nextauth.token";
/// Cookie holding the refresh token; only ever cleared here.
pub const REFRESH_TOKEN_COOKIE: &str = "nextauth.refreshToken";

const SIGN_IN_PATH: &str = "/";
const DASHBOARD_PATH: &str = "/dashboard";

/// Boxed future returned by page loaders; the future may borrow the request
/// context for its whole run.
pub type LoaderFuture<'a, P> =
    Pin<Box<dyn Future<Output = Result<PageResult<P>, LoaderError>> + Send + 'a>>;

/// A page data loader over a cookie-carrying request context.
///
/// Implemented for any `Fn(&mut C) -> LoaderFuture<'_, P>`, so plain async
/// functions returning a boxed future work as loaders without a wrapper type.
pub trait PageLoader<C, P> {
    fn load<'a>(&'a self, ctx: &'a mut C) -> LoaderFuture<'a, P>;
}

impl<C, P, F> PageLoader<C, P> for F
where
    F: for<'a> Fn(&'a mut C) -> LoaderFuture<'a, P>,
{
    fn load<'a>(&'a self, ctx: &'a mut C) -> LoaderFuture<'a, P> {
        self(ctx)
    }
}

/// Guard wrapping a page loader with session and access checks.
///
/// Built with [`with_ssr_auth`]. The guard is itself a [`PageLoader`], so it
/// composes with anything that consumes one.
pub struct SsrAuth<L> {
    inner: L,
    requirement: Option<AccessRequirement>,
}

/// Wraps `loader` so it only runs for authenticated sessions.
///
/// With no `requirement`, holding a session token is sufficient; with one,
/// the token's decoded claims must satisfy it before the loader runs.
pub fn with_ssr_auth<L>(loader: L, requirement: Option<AccessRequirement>) -> SsrAuth<L> {
    SsrAuth {
        inner: loader,
        requirement,
    }
}

impl<C, P, L> PageLoader<C, P> for SsrAuth<L>
where
    C: CookieStore + Send,
    L: PageLoader<C, P> + Sync,
{
    fn load<'a>(&'a self, ctx: &'a mut C) -> LoaderFuture<'a, P> {
        Box::pin(async move {
            let Some(token) = ctx.get(SESSION_TOKEN_COOKIE) else {
                debug!("No session token cookie; redirecting to sign-in");
                return Ok(PageResult::Redirect(Redirect::temporary(SIGN_IN_PATH)));
            };

            if let Some(requirement) = &self.requirement {
                let claims = decode_unverified(&token)?;
                if !requirement.satisfied_by(&claims) {
                    debug!("Session does not satisfy access requirement; redirecting to dashboard");
                    return Ok(PageResult::Redirect(Redirect::temporary(DASHBOARD_PATH)));
                }
            }

            let outcome = self.inner.load(&mut *ctx).await;
            match outcome {
                Err(LoaderError::InvalidSession) => {
                    warn!("Loader rejected the session token; clearing session cookies");
                    ctx.remove(SESSION_TOKEN_COOKIE);
                    ctx.remove(REFRESH_TOKEN_COOKIE);
                    Ok(PageResult::Redirect(Redirect::temporary(SIGN_IN_PATH)))
                }
                outcome => outcome,
            }
        })
    }
}
