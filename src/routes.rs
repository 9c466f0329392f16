//! Routing surface
//!
//! The fixed set of named pages and the one auth gate: the profile page
//! requires a signed-in session and redirects to login otherwise.

use std::fmt;

/// Named pages of the product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Valuation,
    Insights,
    Calculator,
    Predict,
    Contact,
    Features,
    Login,
    Signup,
    Profile,
    NotFound,
}

/// Result of resolving a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Show(Page),
    RedirectToLogin,
}

impl Page {
    /// Map a path to a page; unknown paths land on NotFound
    pub fn from_path(path: &str) -> Page {
        match path.trim_end_matches('/') {
            "" => Page::Home,
            "/valuation" => Page::Valuation,
            "/insights" => Page::Insights,
            "/calculator" => Page::Calculator,
            "/predict" => Page::Predict,
            "/contact" => Page::Contact,
            "/features" => Page::Features,
            "/login" => Page::Login,
            "/signup" => Page::Signup,
            "/profile" => Page::Profile,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Valuation => "/valuation",
            Page::Insights => "/insights",
            Page::Calculator => "/calculator",
            Page::Predict => "/predict",
            Page::Contact => "/contact",
            Page::Features => "/features",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::Profile => "/profile",
            Page::NotFound => "/404",
        }
    }

    /// Only the profile page requires a session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Profile)
    }

    /// Resolve a navigation request against the session state
    pub fn resolve(page: Page, authenticated: bool) -> Resolution {
        if page.requires_auth() && !authenticated {
            Resolution::RedirectToLogin
        } else {
            Resolution::Show(page)
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
