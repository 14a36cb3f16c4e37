//! Guarded dashboard shell; dispatches to the role-specific view.

use leptos::prelude::*;

use session::Role;

use crate::components::dashboards::doctor::DoctorDashboard;
use crate::components::dashboards::hospital::HospitalDashboard;
use crate::components::dashboards::insurance::InsuranceDashboard;
use crate::components::dashboards::patient::PatientDashboard;
use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::state::session::SessionContext;

/// Dashboard route. Any signed-in role may enter; the guard redirects
/// anonymous visitors to `/login`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="dashboard-page">
                <Header/>
                <main class="dashboard-page__main">
                    <RoleDashboard/>
                </main>
            </div>
        </ProtectedRoute>
    }
}

/// Picks the dashboard matching the current identity's role.
#[component]
fn RoleDashboard() -> impl IntoView {
    let session = SessionContext::use_context();

    move || {
        session.state.get().current.map(|identity| match identity.role() {
            Role::Patient => view! { <PatientDashboard identity=identity/> }.into_any(),
            Role::Doctor => view! { <DoctorDashboard identity=identity/> }.into_any(),
            Role::Hospital => view! { <HospitalDashboard identity=identity/> }.into_any(),
            Role::Insurance => view! { <InsuranceDashboard identity=identity/> }.into_any(),
        })
    }
}
