//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, discover_schemes::DiscoverSchemesPage,
    get_health_id::GetHealthIdPage, home::HomePage, login::LoginPage,
    partner_with_us::PartnerWithUsPage, schedule_demo::ScheduleDemoPage, signup::SignupPage,
    unauthorized::UnauthorizedPage, verify_account::VerifyAccountPage,
};
use crate::state::session::SessionContext;

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
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/ayusmat.css"/>
        <Title text="AyuSmat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("get-health-id") view=GetHealthIdPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("discover-schemes") view=DiscoverSchemesPage/>
                <Route path=StaticSegment("partner-with-us") view=PartnerWithUsPage/>
                <Route path=StaticSegment("schedule-demo") view=ScheduleDemoPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("verify-account") view=VerifyAccountPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
            </Routes>
        </Router>
    }
}
