//! Static route table mapping URL paths to views and access requirements.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once when the app mounts and never mutated. The
//! navigation guard reads `requires_auth` from it, and the app shell resolves
//! each path to the page bound to its `ViewId`.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/registro";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_MANAGEMENT_PATH: &str = "/admin/gestion";
pub const COMERCIAL_PATH: &str = "/comercial";

/// Opaque handle to the page rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    Admin,
    AdminManagement,
    Comercial,
}

/// Role a route is intended for. Informational; the guard does not enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Comercial,
}

/// What a route renders: a view, or a redirect to another path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
    pub requires_auth: bool,
    pub role: Option<Role>,
}

impl RouteEntry {
    #[must_use]
    pub fn view(path: &str, view: ViewId) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::View(view), requires_auth: false, role: None }
    }

    #[must_use]
    pub fn protected(path: &str, view: ViewId, role: Role) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::View(view), requires_auth: true, role: Some(role) }
    }

    #[must_use]
    pub fn redirect(path: &str, to: &str) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::Redirect(to.to_owned()), requires_auth: false, role: None }
    }

    /// The bound view, or `None` for redirect entries.
    #[must_use]
    pub fn view_id(&self) -> Option<ViewId> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Error returned when building or resolving against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("route table has no root entry")]
    MissingRoot,
    #[error("root entry must redirect, not render a view")]
    RootNotRedirect,
    #[error("route not found: {0}")]
    NotFound(String),
    #[error("redirect from {from} points to unknown path {to}")]
    DanglingRedirect { from: String, to: String },
    #[error("redirect cycle through {0}")]
    RedirectCycle(String),
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    base_path: String,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a validated table mounted under `base_path`.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] when paths repeat, the root entry is
    /// missing or renders a view, or any redirect fails to reach a view.
    pub fn new(base_path: impl Into<String>, entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let table = Self { base_path: base_path.into(), entries };
        table.validate()?;
        Ok(table)
    }

    /// The application's route set.
    #[must_use]
    pub fn standard(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            entries: vec![
                RouteEntry::redirect(ROOT_PATH, COMERCIAL_PATH),
                RouteEntry::view(LOGIN_PATH, ViewId::Login),
                RouteEntry::view(REGISTER_PATH, ViewId::Register),
                RouteEntry::protected(ADMIN_PATH, ViewId::Admin, Role::Admin),
                RouteEntry::protected(ADMIN_MANAGEMENT_PATH, ViewId::AdminManagement, Role::Admin),
                RouteEntry::protected(COMERCIAL_PATH, ViewId::Comercial, Role::Comercial),
            ],
        }
    }

    /// Check the structural invariants that [`RouteTable::new`] enforces.
    ///
    /// # Errors
    ///
    /// See [`RouteTable::new`].
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteTableError::DuplicatePath(entry.path.clone()));
            }
        }

        let root = self.lookup(ROOT_PATH).ok_or(RouteTableError::MissingRoot)?;
        if root.view_id().is_some() {
            return Err(RouteTableError::RootNotRedirect);
        }

        for entry in &self.entries {
            if matches!(entry.target, RouteTarget::Redirect(_)) {
                self.resolve(&entry.path)?;
            }
        }
        Ok(())
    }

    /// Exact-match lookup. `None` means the framework's fallback handles it.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Follow redirects from `path` until a view entry is reached.
    ///
    /// # Errors
    ///
    /// `NotFound` when `path` is unknown, `DanglingRedirect` when a hop
    /// targets an unknown path, `RedirectCycle` when a hop revisits a path.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry, RouteTableError> {
        let mut entry = self.lookup(path).ok_or_else(|| RouteTableError::NotFound(path.to_owned()))?;
        let mut visited = vec![entry.path.as_str()];

        while let RouteTarget::Redirect(to) = &entry.target {
            if visited.contains(&to.as_str()) {
                return Err(RouteTableError::RedirectCycle(to.clone()));
            }
            entry = self
                .lookup(to)
                .ok_or_else(|| RouteTableError::DanglingRedirect { from: entry.path.clone(), to: to.clone() })?;
            visited.push(entry.path.as_str());
        }
        Ok(entry)
    }

    /// URL prefix the router is mounted under. Not interpreted here.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }
}
