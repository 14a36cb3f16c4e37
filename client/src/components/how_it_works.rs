//! Four-step onboarding explainer.

use leptos::prelude::*;

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "Generate Your UHID",
        description: "Get your unique health ID at birth, first hospital visit, or through assisted registration drives in your area.",
    },
    Step {
        title: "Health Events Logged",
        description: "All doctor visits, lab tests, and hospital stays are automatically logged and visible under your UHID.",
    },
    Step {
        title: "Secure Access & Updates",
        description: "Hospitals and insurers access and update your records via secure consent and authentication protocols.",
    },
    Step {
        title: "Personalized Notifications",
        description: "Receive alerts about available health schemes, insurance options, and important health reminders.",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="how-it-works__inner">
                <h2 class="how-it-works__title">"How AyuSmat Works"</h2>
                <div class="how-it-works__steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="how-it-works__step">
                                    <div class="how-it-works__step-number">{index + 1}</div>
                                    <h3 class="how-it-works__step-title">{step.title}</h3>
                                    <p class="how-it-works__step-text">{step.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
