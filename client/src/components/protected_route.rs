//! Guard wrapper for views that require a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates the access decision whenever the session changes and turns
//! denials into router redirects. Children render only while granted, so a
//! logout mid-visit unmounts the protected view before navigation lands.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use session::{Role, RouteRequirements, evaluate};

use crate::state::session::SessionContext;

/// Renders `children` only when the current session satisfies the
/// requirements; otherwise redirects to the decision's fallback route.
#[component]
pub fn ProtectedRoute(
    /// Roles allowed to view the children. `None` admits any role.
    #[prop(optional)]
    allowed_roles: Option<Vec<Role>>,
    /// Require a verified identity in addition to a session.
    #[prop(optional)]
    require_verification: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = SessionContext::use_context();
    let requirements = RouteRequirements {
        allowed_roles,
        require_verification,
    };

    let decision = Memo::new(move |_| {
        evaluate(session.state.get().current.as_ref(), &requirements)
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = decision.get().redirect_path() {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get().is_granted()>
            {children()}
        </Show>
    }
}
