//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{auth_dashboard::AuthDashboardPage, shop::ShopPage};
use crate::state::session_context::SessionContext;

/// Top-level views reachable by URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Product listing at `/`.
    Shop,
    /// Login form / account overview at `/auth`.
    AuthDashboard,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Shop, Self::AuthDashboard];

    /// Path segment used by the router (without the leading slash).
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Shop => "",
            Self::AuthDashboard => "auth",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Shop => "/",
            Self::AuthDashboard => "/auth",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shop => "Shop",
            Self::AuthDashboard => "Account",
        }
    }

    /// Resolve a location path; a single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store for the lifetime of the page and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <NavBar/>
            <main class="storefront-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment(AppRoute::Shop.segment()) view=ShopPage/>
                    <Route path=StaticSegment(AppRoute::AuthDashboard.segment()) view=AuthDashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
