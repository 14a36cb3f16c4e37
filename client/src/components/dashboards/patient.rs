//! Patient dashboard: health metrics, appointments, and recent activity.

use leptos::prelude::*;

use session::Identity;

struct Metric {
    label: &'static str,
    value: &'static str,
    unit: &'static str,
    status: &'static str,
}

const HEALTH_METRICS: &[Metric] = &[
    Metric { label: "Blood Pressure", value: "120/80", unit: "mmHg", status: "normal" },
    Metric { label: "Blood Sugar", value: "95", unit: "mg/dL", status: "normal" },
    Metric { label: "Weight", value: "70", unit: "kg", status: "normal" },
    Metric { label: "BMI", value: "22.5", unit: "", status: "normal" },
];

struct Appointment {
    date: &'static str,
    time: &'static str,
    doctor: &'static str,
    specialty: &'static str,
    hospital: &'static str,
}

const UPCOMING_APPOINTMENTS: &[Appointment] = &[
    Appointment {
        date: "2025-01-20",
        time: "10:00 AM",
        doctor: "Dr. Priya Sharma",
        specialty: "Cardiology",
        hospital: "Apollo Hospital",
    },
    Appointment {
        date: "2025-01-25",
        time: "02:30 PM",
        doctor: "Dr. Rajesh Kumar",
        specialty: "General Medicine",
        hospital: "City Hospital",
    },
];

struct Activity {
    date: &'static str,
    kind: &'static str,
    detail: &'static str,
    status: &'static str,
}

const RECENT_ACTIVITIES: &[Activity] = &[
    Activity {
        date: "2025-01-15",
        kind: "Consultation",
        detail: "Dr. Sarah Smith, City Hospital",
        status: "completed",
    },
    Activity {
        date: "2025-01-10",
        kind: "Lab Test",
        detail: "Blood Sugar Test, Metro Lab",
        status: "completed",
    },
    Activity {
        date: "2025-01-05",
        kind: "Prescription",
        detail: "Metformin 500mg, Dr. John Doe",
        status: "active",
    },
    Activity {
        date: "2024-12-28",
        kind: "Insurance Claim",
        detail: "₹15,000, Star Health",
        status: "approved",
    },
];

/// Patient view: identity card plus static health overview.
#[component]
pub fn PatientDashboard(identity: Identity) -> impl IntoView {
    let health_id = match &identity.profile {
        session::RoleProfile::Patient { health_id } => health_id.clone(),
        _ => String::new(),
    };

    view! {
        <div class="dashboard dashboard--patient">
            <section class="dashboard__welcome">
                <h2 class="dashboard__welcome-title">
                    "Welcome back, " {identity.display_name.clone()}
                </h2>
                <p class="dashboard__welcome-id">"UHID: " {health_id}</p>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Health Metrics"</h3>
                <div class="dashboard__metric-grid">
                    {HEALTH_METRICS
                        .iter()
                        .map(|metric| {
                            view! {
                                <div class="dashboard__metric">
                                    <div class="dashboard__metric-label">{metric.label}</div>
                                    <div class="dashboard__metric-value">
                                        {metric.value} " " {metric.unit}
                                    </div>
                                    <div class="dashboard__metric-status">{metric.status}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Upcoming Appointments"</h3>
                <ul class="dashboard__list">
                    {UPCOMING_APPOINTMENTS
                        .iter()
                        .map(|appt| {
                            view! {
                                <li class="dashboard__list-item">
                                    <span class="dashboard__list-primary">
                                        {appt.doctor} " · " {appt.specialty}
                                    </span>
                                    <span class="dashboard__list-secondary">
                                        {appt.date} " " {appt.time} " · " {appt.hospital}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Recent Activity"</h3>
                <ul class="dashboard__list">
                    {RECENT_ACTIVITIES
                        .iter()
                        .map(|activity| {
                            view! {
                                <li class="dashboard__list-item">
                                    <span class="dashboard__list-primary">
                                        {activity.kind} " · " {activity.detail}
                                    </span>
                                    <span class="dashboard__list-secondary">
                                        {activity.date} " · " {activity.status}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
