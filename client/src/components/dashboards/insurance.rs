//! Insurance dashboard: claim statistics and a searchable claims queue.

#[cfg(test)]
#[path = "insurance_test.rs"]
mod insurance_test;

use leptos::prelude::*;

use session::Identity;

struct ClaimStat {
    label: &'static str,
    value: &'static str,
}

const CLAIM_STATS: &[ClaimStat] = &[
    ClaimStat { label: "Total Claims", value: "1,247" },
    ClaimStat { label: "Pending", value: "89" },
    ClaimStat { label: "Approved", value: "1,098" },
    ClaimStat { label: "Rejected", value: "60" },
    ClaimStat { label: "Avg Processing", value: "3.2 days" },
    ClaimStat { label: "Fraud Detected", value: "12" },
];

pub(crate) struct Claim {
    pub claim_id: &'static str,
    pub patient: &'static str,
    pub uhid: &'static str,
    pub policy: &'static str,
    pub hospital: &'static str,
    pub amount: u32,
    pub treatment: &'static str,
    pub status: &'static str,
}

const CLAIMS: &[Claim] = &[
    Claim {
        claim_id: "CLM2025001234",
        patient: "Rajesh Kumar",
        uhid: "UHID123456789",
        policy: "POL789456123",
        hospital: "City Hospital",
        amount: 45_000,
        treatment: "Cardiac catheterization",
        status: "approved",
    },
    Claim {
        claim_id: "CLM2025001235",
        patient: "Priya Sharma",
        uhid: "UHID987654321",
        policy: "POL456789012",
        hospital: "Apollo Hospital",
        amount: 125_000,
        treatment: "Maternity - C-section",
        status: "under-review",
    },
    Claim {
        claim_id: "CLM2025001236",
        patient: "Amit Singh",
        uhid: "UHID456789123",
        policy: "POL123456789",
        hospital: "Metro Hospital",
        amount: 85_000,
        treatment: "Orthopedic surgery",
        status: "pending-documents",
    },
];

/// Case-insensitive claim search over patient, claim ID, UHID, and hospital.
pub(crate) fn filter_claims<'a>(claims: &'a [Claim], term: &str) -> Vec<&'a Claim> {
    let term = term.trim().to_lowercase();
    claims
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.patient.to_lowercase().contains(&term)
                || c.claim_id.to_lowercase().contains(&term)
                || c.uhid.to_lowercase().contains(&term)
                || c.hospital.to_lowercase().contains(&term)
        })
        .collect()
}

/// Insurance provider view: claims queue for the insurer.
#[component]
pub fn InsuranceDashboard(identity: Identity) -> impl IntoView {
    let insurer = match &identity.profile {
        session::RoleProfile::Insurance { insurer_name } => insurer_name.clone(),
        _ => String::new(),
    };
    let search = RwSignal::new(String::new());

    view! {
        <div class="dashboard dashboard--insurance">
            <section class="dashboard__welcome">
                <h2 class="dashboard__welcome-title">
                    "Welcome, " {identity.display_name.clone()}
                </h2>
                <p class="dashboard__welcome-id">{insurer}</p>
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">"Claims Overview"</h3>
                <div class="dashboard__metric-grid">
                    {CLAIM_STATS
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
                <h3 class="dashboard__section-title">"Claims Queue"</h3>
                <input
                    class="dashboard__search"
                    type="search"
                    placeholder="Search by patient, claim ID, UHID, or hospital"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <ul class="dashboard__list">
                    {move || {
                        filter_claims(CLAIMS, &search.get())
                            .into_iter()
                            .map(|claim| {
                                view! {
                                    <li class="dashboard__list-item">
                                        <span class="dashboard__list-primary">
                                            {claim.claim_id} " · " {claim.patient}
                                            " (" {claim.uhid} ")"
                                        </span>
                                        <span class="dashboard__list-secondary">
                                            {claim.hospital} " · " {claim.treatment}
                                            " · ₹" {claim.amount.to_string()}
                                            " · " {claim.policy} " · " {claim.status}
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
