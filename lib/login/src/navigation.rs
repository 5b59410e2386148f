//! Router collaborator seam.

/// Route of the login screen.
pub const LOGIN_PATH: &str = "/login";

/// Route the user lands on after signing in.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Options for a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Options that replace the current history entry.
    #[must_use]
    pub const fn replace() -> Self {
        Self { replace: true }
    }
}

/// Moves the user to another route.
pub trait Navigator {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, options: NavigateOptions) {
        self(path, options);
    }
}
