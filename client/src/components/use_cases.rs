//! Audience-specific benefit cards.

use leptos::prelude::*;

struct UseCase {
    title: &'static str,
    subtitle: &'static str,
    benefits: &'static [&'static str],
}

const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "For Patients",
        subtitle: "Urban & Rural",
        benefits: &[
            "One health ID for life - no more lost records",
            "Instant access to health history anywhere",
            "Compare and buy insurance directly",
            "Get notified about eligible health schemes",
            "Emergency care with immediate medical history",
        ],
    },
    UseCase {
        title: "For Doctors & Hospitals",
        subtitle: "Healthcare Providers",
        benefits: &[
            "Instant access to complete patient history",
            "Reduced paperwork and administrative tasks",
            "Better diagnosis with comprehensive data",
            "Streamlined billing and insurance claims",
            "Real-time updates across all systems",
        ],
    },
    UseCase {
        title: "For Insurance Companies",
        subtitle: "Insurers & TPAs",
        benefits: &[
            "Rapid and secure claim processing",
            "Reduced fraud with verified health data",
            "Better risk assessment capabilities",
            "Direct policy sales through platform",
            "Real-time claim status updates",
        ],
    },
    UseCase {
        title: "For Government",
        subtitle: "Policy Makers",
        benefits: &[
            "Real-time healthcare data for policy decisions",
            "Targeted health scheme implementations",
            "Population health analytics and insights",
            "Efficient resource allocation",
            "Better healthcare outcome tracking",
        ],
    },
];

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="use-cases">
            <div class="use-cases__inner">
                <h2 class="use-cases__title">"Built for Everyone in Healthcare"</h2>
                <div class="use-cases__grid">
                    {USE_CASES
                        .iter()
                        .map(|case| {
                            view! {
                                <div class="use-cases__card">
                                    <h3 class="use-cases__card-title">{case.title}</h3>
                                    <p class="use-cases__card-subtitle">{case.subtitle}</p>
                                    <ul class="use-cases__benefits">
                                        {case
                                            .benefits
                                            .iter()
                                            .map(|benefit| view! { <li>{*benefit}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
