//! Hospital dashboard: occupancy stats, admissions, and a ward patient list.

#[cfg(test)]
#[path = "hospital_test.rs"]
mod hospital_test;

use leptos::prelude::*;

use session::Identity;

struct OccupancyStat {
    label: &'static str,
    value: &'static str,
}

const OCCUPANCY: &[OccupancyStat] = &[
    OccupancyStat { label: "Total Beds", value: "250" },
    OccupancyStat { label: "Occupied Beds", value: "187" },
    OccupancyStat { label: "Available Beds", value: "63" },
    OccupancyStat { label: "Patients", value: "342" },
    OccupancyStat { label: "Admissions Today", value: "12" },
    OccupancyStat { label: "Discharges Scheduled", value: "8" },
    OccupancyStat { label: "Emergency Cases", value: "5" },
    OccupancyStat { label: "Staff on Duty", value: "89" },
];

struct Admission {
    patient: &'static str,
    uhid: &'static str,
    time: &'static str,
    department: &'static str,
    doctor: &'static str,
    condition: &'static str,
    status: &'static str,
    bed: &'static str,
}

const RECENT_ADMISSIONS: &[Admission] = &[
    Admission {
        patient: "Rajesh Kumar",
        uhid: "UHID123456789",
        time: "2025-01-15 08:30 AM",
        department: "Cardiology",
        doctor: "Dr. Sarah Smith",
        condition: "Chest pain, suspected MI",
        status: "admitted",
        bed: "ICU-12",
    },
    Admission {
        patient: "Priya Sharma",
        uhid: "UHID987654321",
        time: "2025-01-15 10:15 AM",
        department: "Obstetrics",
        doctor: "Dr. Meera Gupta",
        condition: "Labor - 38 weeks",
        status: "in-labor",
        bed: "MAT-05",
    },
    Admission {
        patient: "Amit Singh",
        uhid: "UHID456789123",
        time: "2025-01-15 02:45 PM",
        department: "Emergency",
        doctor: "Dr. Rajesh Kumar",
        condition: "Road traffic accident",
        status: "critical",
        bed: "ER-03",
    },
];

pub(crate) struct WardPatient {
    pub name: &'static str,
    pub uhid: &'static str,
    pub department: &'static str,
    pub doctor: &'static str,
    pub condition: &'static str,
    pub status: &'static str,
    pub bed: &'static str,
}

const WARD_PATIENTS: &[WardPatient] = &[
    WardPatient {
        name: "Sunita Devi",
        uhid: "UHID789123456",
        department: "Internal Medicine",
        doctor: "Dr. Priya Sharma",
        condition: "Diabetes management",
        status: "stable",
        bed: "GW-201",
    },
    WardPatient {
        name: "Vikram Patel",
        uhid: "UHID321654987",
        department: "Cardiology",
        doctor: "Dr. Sarah Smith",
        condition: "Post-angioplasty care",
        status: "recovering",
        bed: "CCU-08",
    },
    WardPatient {
        name: "Meera Gupta",
        uhid: "UHID654321789",
        department: "Orthopedics",
        doctor: "Dr. Amit Kumar",
        condition: "Hip fracture surgery",
        status: "post-op",
        bed: "OR-15",
    },
];

/// Case-insensitive ward search over name, UHID, condition, and department.
pub(crate) fn filter_ward<'a>(patients: &'a [WardPatient], term: &str) -> Vec<&'a WardPatient> {
    let term = term.trim().to_lowercase();
    patients
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.uhid.to_lowercase().contains(&term)
                || p.condition.to_lowercase().contains(&term)
                || p.department.to_lowercase().contains(&term)
        })
        .collect()
}

/// Hospital staff view: operations overview for the facility.
#[component]
pub fn HospitalDashboard(identity: Identity) -> impl IntoView {
    let facility = match &identity.profile {
        session::RoleProfile::Hospital { facility_id } => facility_id.clone(),
        _ => String::new(),
    };
    let search = RwSignal::new(String::new());

    view! {
        <div class="dashboard dashboard--hospital">
            <section class="dashboard__welcome">
                <h2 class="dashboard__welcome-title">
                    {identity.display_name.clone()} " Dashboard"
                </h2>
                <p class="dashboard__welcome-id">"Hospital ID: " {facility}</p>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Operations"</h3>
                <div class="dashboard__metric-grid">
                    {OCCUPANCY
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="dashboard__metric">
                                    <div class="dashboard__metric-value">{stat.value}</div>
                                    <div class="dashboard__metric-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Recent Admissions"</h3>
                <ul class="dashboard__list">
                    {RECENT_ADMISSIONS
                        .iter()
                        .map(|admission| {
                            view! {
                                <li class="dashboard__list-item">
                                    <span class="dashboard__list-primary">
                                        {admission.patient} " (" {admission.uhid} ") · "
                                        {admission.department} " · " {admission.bed}
                                    </span>
                                    <span class="dashboard__list-secondary">
                                        {admission.time} " · " {admission.doctor} " · "
                                        {admission.condition} " · " {admission.status}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Ward Patients"</h3>
                <input
                    class="dashboard__search"
                    type="search"
                    placeholder="Search by name, UHID, condition, or department"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <ul class="dashboard__list">
                    {move || {
                        filter_ward(WARD_PATIENTS, &search.get())
                            .into_iter()
                            .map(|patient| {
                                view! {
                                    <li class="dashboard__list-item">
                                        <span class="dashboard__list-primary">
                                            {patient.name} " (" {patient.uhid} ") · " {patient.bed}
                                        </span>
                                        <span class="dashboard__list-secondary">
                                            {patient.department} " · " {patient.doctor} " · "
                                            {patient.condition} " · " {patient.status}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}
