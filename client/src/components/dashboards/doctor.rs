//! Doctor dashboard: today's appointments and a searchable patient list.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use leptos::prelude::*;

use session::Identity;

struct TodayAppointment {
    time: &'static str,
    patient: &'static str,
    uhid: &'static str,
    kind: &'static str,
    status: &'static str,
    condition: &'static str,
}

const TODAY_APPOINTMENTS: &[TodayAppointment] = &[
    TodayAppointment {
        time: "09:00 AM",
        patient: "Rajesh Kumar",
        uhid: "UHID123456789",
        kind: "Follow-up",
        status: "confirmed",
        condition: "Hypertension",
    },
    TodayAppointment {
        time: "10:30 AM",
        patient: "Priya Sharma",
        uhid: "UHID987654321",
        kind: "New Patient",
        status: "confirmed",
        condition: "Diabetes screening",
    },
    TodayAppointment {
        time: "02:00 PM",
        patient: "Amit Singh",
        uhid: "UHID456789123",
        kind: "Consultation",
        status: "pending",
        condition: "Chest pain",
    },
];

pub(crate) struct PatientRecord {
    pub name: &'static str,
    pub uhid: &'static str,
    pub age: u8,
    pub last_visit: &'static str,
    pub condition: &'static str,
    pub status: &'static str,
}

const RECENT_PATIENTS: &[PatientRecord] = &[
    PatientRecord {
        name: "Sunita Devi",
        uhid: "UHID789123456",
        age: 55,
        last_visit: "2025-01-14",
        condition: "Diabetes Type 2",
        status: "stable",
    },
    PatientRecord {
        name: "Vikram Patel",
        uhid: "UHID321654987",
        age: 38,
        last_visit: "2025-01-12",
        condition: "Hypertension",
        status: "improving",
    },
    PatientRecord {
        name: "Meera Gupta",
        uhid: "UHID654321789",
        age: 42,
        last_visit: "2025-01-10",
        condition: "Thyroid disorder",
        status: "monitoring",
    },
];

/// Case-insensitive patient search over name, UHID, and condition.
pub(crate) fn filter_patients<'a>(
    patients: &'a [PatientRecord],
    term: &str,
) -> Vec<&'a PatientRecord> {
    let term = term.trim().to_lowercase();
    patients
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.uhid.to_lowercase().contains(&term)
                || p.condition.to_lowercase().contains(&term)
        })
        .collect()
}

/// Doctor view: schedule plus searchable patient records.
#[component]
pub fn DoctorDashboard(identity: Identity) -> impl IntoView {
    let license = match &identity.profile {
        session::RoleProfile::Doctor { license_number } => license_number.clone(),
        _ => String::new(),
    };
    let search = RwSignal::new(String::new());

    view! {
        <div class="dashboard dashboard--doctor">
            <section class="dashboard__welcome">
                <h2 class="dashboard__welcome-title">
                    "Good morning, " {identity.display_name.clone()}
                </h2>
                <p class="dashboard__welcome-id">"License: " {license}</p>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Today's Appointments"</h3>
                <ul class="dashboard__list">
                    {TODAY_APPOINTMENTS
                        .iter()
                        .map(|appt| {
                            view! {
                                <li class="dashboard__list-item">
                                    <span class="dashboard__list-primary">
                                        {appt.time} " · " {appt.patient} " (" {appt.uhid} ")"
                                    </span>
                                    <span class="dashboard__list-secondary">
                                        {appt.kind} " · " {appt.condition} " · " {appt.status}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Recent Patients"</h3>
                <input
                    class="dashboard__search"
                    type="search"
                    placeholder="Search by name, UHID, or condition"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <ul class="dashboard__list">
                    {move || {
                        filter_patients(RECENT_PATIENTS, &search.get())
                            .into_iter()
                            .map(|patient| {
                                view! {
                                    <li class="dashboard__list-item">
                                        <span class="dashboard__list-primary">
                                            {patient.name} ", " {patient.age} " (" {patient.uhid} ")"
                                        </span>
                                        <span class="dashboard__list-secondary">
                                            {patient.condition} " · " {patient.status}
                                            " · last visit " {patient.last_visit}
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
