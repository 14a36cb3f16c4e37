//! Top navigation bar, session-aware.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

/// Site header with marketing navigation and login/logout actions.
#[component]
pub fn Header() -> impl IntoView {
    let session = SessionContext::use_context();
    let signed_in = move || session.state.get().current.is_some();

    view! {
        <header class="header">
            <div class="header__inner">
                <a href="/" class="header__brand">"AyuSmat"</a>

                <nav class="header__nav">
                    <a href="/" class="header__link">"Home"</a>
                    <a href="/#features" class="header__link">"Features"</a>
                    <a href="/#how-it-works" class="header__link">"How It Works"</a>
                    <a href="/discover-schemes" class="header__link">"Health Schemes"</a>
                    <a href="/partner-with-us" class="header__link">"Partner"</a>
                    <a href="/schedule-demo" class="header__link">"Demo"</a>
                </nav>

                <div class="header__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a href="/login" class="btn btn--ghost">"Login"</a>
                                <a href="/get-health-id" class="btn btn--primary">
                                    "Get Health ID"
                                </a>
                            }
                        }
                    >
                        <a href="/dashboard" class="btn btn--ghost">"Dashboard"</a>
                        <LogoutButton/>
                    </Show>
                </div>
            </div>
        </header>
    }
}

/// Logout action; returns to the home page after clearing the session.
#[component]
fn LogoutButton() -> impl IntoView {
    let session = SessionContext::use_context();
    let navigate = use_navigate();
    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <button class="btn btn--primary" on:click=on_logout>
            "Logout"
        </button>
    }
}
