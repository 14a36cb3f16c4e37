//! Expandable FAQ section. One entry open at a time.

use leptos::prelude::*;

struct Entry {
    question: &'static str,
    answer: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        question: "What is a Unique Health ID (UHID) and how is it different from Aadhaar?",
        answer: "A UHID is your personal health identifier that stays with you for life. Unlike Aadhaar which is for identity, UHID is specifically for health records. It connects all your medical history, prescriptions, tests, and treatments across different hospitals and doctors.",
    },
    Entry {
        question: "Is my health data safe and private on AyuSmat?",
        answer: "Yes, absolutely. AyuSmat uses blockchain technology and follows strict HIPAA and GDPR compliance standards. Your health data is encrypted and can only be accessed with your consent. You control who can see your medical information.",
    },
    Entry {
        question: "How does AyuSmat help rural communities access healthcare?",
        answer: "AyuSmat provides mobile registration drives, SMS alerts for health schemes, multi-language support, and offline features. Rural users get personalized notifications about government health schemes they're eligible for based on their location and UHID.",
    },
    Entry {
        question: "Can I buy health insurance through AyuSmat?",
        answer: "Yes, you can compare and purchase health insurance policies directly through AyuSmat. The platform also helps with digital claim submission and tracking, making the entire insurance process much faster and easier.",
    },
    Entry {
        question: "What happens if I don't have a smartphone?",
        answer: "AyuSmat works on basic phones too! You can receive SMS alerts, use IVR (phone call) services, and visit local health centers where staff can help you access your UHID and health information.",
    },
    Entry {
        question: "How do hospitals and doctors use my UHID?",
        answer: "With your permission, healthcare providers can instantly access your complete medical history, allergies, current medications, and past treatments. This helps them provide better care and avoid dangerous drug interactions or repeat tests.",
    },
    Entry {
        question: "Will AyuSmat work with government health schemes like Ayushman Bharat?",
        answer: "Yes, AyuSmat integrates with all major government health schemes. You'll receive automatic alerts about schemes you qualify for and can easily apply or access benefits through the platform.",
    },
    Entry {
        question: "How much does it cost to use AyuSmat?",
        answer: "Getting your UHID and basic health record management is completely free for all citizens. Some premium features like insurance comparison tools and advanced analytics may have minimal charges, but core healthcare access remains free.",
    },
];

#[component]
pub fn Faq() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="faq">
            <div class="faq__inner">
                <h2 class="faq__title">"Frequently Asked Questions"</h2>
                <div class="faq__list">
                    {ENTRIES
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let toggle = move |_| {
                                open.update(|o| {
                                    *o = if *o == Some(index) { None } else { Some(index) };
                                });
                            };
                            view! {
                                <div class="faq__entry">
                                    <button class="faq__question" on:click=toggle>
                                        {entry.question}
                                    </button>
                                    <Show when=move || open.get() == Some(index)>
                                        <p class="faq__answer">{entry.answer}</p>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
