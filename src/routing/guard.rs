//! Navigation guard deciding whether a navigation may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is a pure function of the target path, the session flag, and the
//! route table. It never navigates or touches storage itself; the app shell
//! enacts the returned [`Decision`] through the Leptos router.
//!
//! ORDERING
//! ========
//! Checks run in a fixed order: unknown paths are deferred, protected paths
//! without a session go to login, authenticated sessions are bounced off entry
//! paths unless exempted, everything else is allowed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::BTreeSet;

use super::table::{COMERCIAL_PATH, LOGIN_PATH, REGISTER_PATH, RouteTable};
use crate::state::session::{TokenStore, session_flag};

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

impl Decision {
    #[must_use]
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(path) => Some(path),
        }
    }
}

/// A single navigation attempt as reported by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: String,
    pub current_path: String,
}

/// Redirect targets and path sets the guard works from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Where unauthenticated sessions are sent.
    pub login_path: String,
    /// Default authenticated landing page.
    pub landing_path: String,
    /// Paths an authenticated session is redirected away from.
    pub entry_paths: BTreeSet<String>,
    /// Entry paths that stay reachable while authenticated.
    pub allow_when_authenticated: BTreeSet<String>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
            landing_path: COMERCIAL_PATH.to_owned(),
            entry_paths: BTreeSet::from([LOGIN_PATH.to_owned()]),
            allow_when_authenticated: BTreeSet::from([REGISTER_PATH.to_owned()]),
        }
    }
}

impl GuardPolicy {
    fn bounces_authenticated(&self, path: &str) -> bool {
        self.entry_paths.contains(path) && !self.allow_when_authenticated.contains(path)
    }
}

/// Evaluate one navigation against `table` under `policy`.
#[must_use]
pub fn decide(table: &RouteTable, policy: &GuardPolicy, target_path: &str, session_flag: bool) -> Decision {
    let Some(entry) = table.lookup(target_path) else {
        return Decision::Allow;
    };

    if entry.requires_auth && !session_flag {
        return Decision::RedirectTo(policy.login_path.clone());
    }
    if session_flag && policy.bounces_authenticated(target_path) {
        return Decision::RedirectTo(policy.landing_path.clone());
    }
    Decision::Allow
}

/// Route table and policy bundled for use by the app shell.
#[derive(Clone, Debug)]
pub struct NavigationGuard {
    table: RouteTable,
    policy: GuardPolicy,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(table: RouteTable, policy: GuardPolicy) -> Self {
        Self { table, policy }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    #[must_use]
    pub fn decide(&self, target_path: &str, session_flag: bool) -> Decision {
        decide(&self.table, &self.policy, target_path, session_flag)
    }

    /// Read the session flag once from `store` and decide `request`.
    pub fn check(&self, request: &NavigationRequest, store: &dyn TokenStore) -> Decision {
        let flag = session_flag(store);
        let decision = self.decide(&request.target_path, flag);
        log::debug!(
            "guard: {} -> {} session={flag} decision={decision:?}",
            request.current_path,
            request.target_path
        );
        decision
    }
}
