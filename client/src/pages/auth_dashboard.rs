//! Authentication dashboard: login form when signed out, account overview
//! and logout when signed in.

#[cfg(test)]
#[path = "auth_dashboard_test.rs"]
mod auth_dashboard_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session_context::SessionContext;

/// Trimmed, non-empty login input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validate form input before hitting the token endpoint.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Dashboard at `/auth`.
#[component]
pub fn AuthDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>().session();

    view! {
        <section class="auth-dashboard">
            {move || {
                let current = session.get();
                match (current.authenticated, current.user) {
                    (true, Some(user)) => view! { <AccountOverview user/> }.into_any(),
                    _ => view! { <LoginForm/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        pending.set(true);

        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&credentials.username, &credentials.password).await;
            pending.set(false);
            match outcome {
                Ok(resp) => {
                    password.set(String::new());
                    if let Err(err) = ctx.set_session(resp.user, resp.access_token) {
                        leptos::logging::warn!("signed in without a persisted session: {err}");
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h1>"Sign in"</h1>
            <label class="login-form__label">
                "Username"
                <input
                    class="login-form__input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="login-form__label">
                "Password"
                <input
                    class="login-form__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

#[component]
fn AccountOverview(user: User) -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let on_logout = move |_| {
        if let Err(err) = ctx.clear_session() {
            leptos::logging::warn!("logout left storage behind: {err}");
        }
    };

    let display_name = user.display_name();
    let address = user.address_lines();
    let User { email, role, phone_number, .. } = user;

    view! {
        <div class="account-overview">
            <h1>{format!("Welcome, {display_name}")}</h1>
            <dl class="account-overview__details">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd class="account-overview__role">{role}</dd>
                {phone_number.map(|phone| view! {
                    <dt>"Phone"</dt>
                    <dd>{phone}</dd>
                })}
                {(!address.is_empty()).then(|| view! {
                    <dt>"Address"</dt>
                    <dd>
                        {address.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                    </dd>
                })}
            </dl>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
