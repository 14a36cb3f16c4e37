//! Testimonial cards from across the platform's audiences.

use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Priya Sharma",
        role: "Cardiologist, AIIMS Delhi",
        content: "AyuSmat has transformed how I treat patients. Having instant access to complete medical history helps me make better diagnoses, especially during emergencies.",
    },
    Testimonial {
        name: "Ravi Kumar",
        role: "Patient from Rural Rajasthan",
        content: "My family got our health IDs through a mobile camp. Now when we visit the city hospital, they know our complete health history. It's like magic!",
    },
    Testimonial {
        name: "Anjali Patel",
        role: "Insurance Manager, Star Health",
        content: "Claim processing time has reduced from 15 days to just 2 days. The verified health data through AyuSmat has significantly reduced fraud cases.",
    },
    Testimonial {
        name: "Dr. Rajesh Gupta",
        role: "Chief Medical Officer, Rural Health Mission",
        content: "AyuSmat helps us identify which health schemes our rural population needs most. The real-time data is invaluable for policy making.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="testimonials__inner">
                <h2 class="testimonials__title">"Trusted Across India"</h2>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonials__card">
                                    <blockquote class="testimonials__quote">{t.content}</blockquote>
                                    <figcaption class="testimonials__attribution">
                                        <span class="testimonials__name">{t.name}</span>
                                        <span class="testimonials__role">{t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
