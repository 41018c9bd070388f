//! Route guard.
//!
//! Pure mapping from (verdict, page requirement) to a navigation decision.
//! Evaluated once per activation and re-evaluated only when the verdict
//! changes; errors never reach this boundary.

use crate::validator::Verdict;

/// Navigable pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public auth entry point (login/register)
    Authorise,
    /// Protected profile page
    UserProfile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Authorise => "/authorise",
            Route::UserProfile => "/UserProfile",
        }
    }
}

/// Access requirement of the page currently mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// The auth entry point: valid sessions are redirected away
    Public,
    /// Requires a valid session
    Protected,
}

/// Where to redirect, if anywhere.
///
/// While the verdict is `Pending` no navigation decision is made - the
/// caller renders a neutral waiting state. Once settled, a protected page
/// with an invalid session redirects to the auth entry, and the auth entry
/// with a valid session redirects to the profile page.
pub fn redirect_for(verdict: Verdict, access: PageAccess) -> Option<Route> {
    match (verdict, access) {
        (Verdict::Pending, _) => None,
        (Verdict::Invalid, PageAccess::Protected) => Some(Route::Authorise),
        (Verdict::Valid, PageAccess::Public) => Some(Route::UserProfile),
        _ => None,
    }
}
