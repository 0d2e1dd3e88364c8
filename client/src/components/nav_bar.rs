//! Site header with route links and the signed-in username.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppRoute;
use crate::state::session_context::SessionContext;

/// Header navigation. Links are generated from [`AppRoute::ALL`].
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>().session();

    let signed_in_as = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .filter(|_| s.authenticated)
                .map(|user| format!("Signed in as {}", user.username))
        })
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=AppRoute::Shop.path()>
                "Storefront"
            </a>
            <nav class="nav-bar__links">
                {AppRoute::ALL
                    .into_iter()
                    .map(|route| view! { <A href=route.path()>{route.title()}</A> })
                    .collect_view()}
            </nav>
            <span class="nav-bar__user">{signed_in_as}</span>
        </header>
    }
}
