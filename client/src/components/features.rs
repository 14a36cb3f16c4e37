//! Feature grid for the landing page.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Lifelong UHID",
        description: "Every citizen gets a single health ID for all hospitals and doctors. No repeated registration or lost records ever.",
    },
    Feature {
        title: "Complete Digital Health Records",
        description: "All medical history, prescriptions, tests, allergies, and treatments stored and updated under your UHID.",
    },
    Feature {
        title: "Hospital & Clinic Integration",
        description: "Mandatory for all public and private hospitals. Healthcare providers update patient records efficiently.",
    },
    Feature {
        title: "Insurance & Claims",
        description: "Buy health insurance, compare plans, and submit claims digitally with instant access for insurers.",
    },
    Feature {
        title: "Rural Health Scheme Discovery",
        description: "Personalized alerts for government and private health schemes based on your UHID and location.",
    },
    Feature {
        title: "Emergency Care",
        description: "Doctors instantly access life-saving details like allergies and critical history during emergencies.",
    },
    Feature {
        title: "Privacy & Security",
        description: "Blockchain-backed, consent-based access with full HIPAA and GDPR compliance for data protection.",
    },
    Feature {
        title: "Accessibility",
        description: "Mobile and web apps with multi-language support and rural-friendly offline features for everyone.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="features__inner">
                <h2 class="features__title">"Everything Your Health Needs, In One Place"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="features__card">
                                    <h3 class="features__card-title">{feature.title}</h3>
                                    <p class="features__card-text">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
