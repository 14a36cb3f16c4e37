//! Access-denied view for role mismatches.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1 class="unauthorized-page__title">"Access Denied"</h1>
            <p class="unauthorized-page__text">
                "Your account does not have permission to view this page."
            </p>
            <div class="unauthorized-page__actions">
                <a href="/dashboard" class="btn btn--primary">"Go to Your Dashboard"</a>
                <a href="/" class="btn btn--outline">"Back to Home"</a>
            </div>
        </div>
    }
}
