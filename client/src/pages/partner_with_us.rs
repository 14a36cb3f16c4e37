//! Partnership inquiry form for hospitals, doctors, insurers, and agencies.

#[cfg(test)]
#[path = "partner_with_us_test.rs"]
mod partner_with_us_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::util::validate::{is_valid_email, is_valid_mobile, required};

const ORGANIZATION_TYPES: &[&str] = &[
    "Hospital / Healthcare Provider",
    "Individual Doctor / Practitioner",
    "Insurance Company",
    "Government / NGO",
];

struct PartnerStat {
    value: &'static str,
    label: &'static str,
}

const PARTNER_STATS: &[PartnerStat] = &[
    PartnerStat { value: "5,000+", label: "Partner Hospitals" },
    PartnerStat { value: "50+", label: "Insurance Partners" },
    PartnerStat { value: "10M+", label: "Patients Served" },
    PartnerStat { value: "95%", label: "Partner Satisfaction" },
];

/// Raw inquiry fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct PartnerInquiry {
    pub organization_type: String,
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub location: String,
}

pub(crate) fn validate_inquiry(inquiry: &PartnerInquiry) -> Result<(), &'static str> {
    if !required(&inquiry.organization_type) {
        return Err("Select your organization type.");
    }
    if !required(&inquiry.organization_name) {
        return Err("Organization name is required.");
    }
    if !required(&inquiry.contact_person) {
        return Err("Contact person name is required.");
    }
    if !is_valid_email(&inquiry.email) {
        return Err("Enter a valid email address.");
    }
    if !is_valid_mobile(&inquiry.phone) {
        return Err("Enter a valid 10-digit mobile number.");
    }
    if !required(&inquiry.designation) {
        return Err("Designation is required.");
    }
    if !required(&inquiry.location) {
        return Err("Location is required.");
    }
    Ok(())
}

#[component]
pub fn PartnerWithUsPage() -> impl IntoView {
    let organization_type = RwSignal::new(String::new());
    let organization_name = RwSignal::new(String::new());
    let contact_person = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let designation = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = PartnerInquiry {
            organization_type: organization_type.get(),
            organization_name: organization_name.get(),
            contact_person: contact_person.get(),
            email: email.get(),
            phone: phone.get(),
            designation: designation.get(),
            location: location.get(),
        };
        match validate_inquiry(&inquiry) {
            Ok(()) => {
                form_error.set(None);
                submitted.set(true);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="partner-page">
            <Header/>
            <main class="partner-page__main">
                <h1 class="partner-page__title">"Partner with AyuSmat"</h1>

                <div class="partner-page__stats">
                    {PARTNER_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="partner-page__stat">
                                    <div class="partner-page__stat-value">{stat.value}</div>
                                    <div class="partner-page__stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show
                    when=move || submitted.get()
                    fallback=move || {
                        view! {
                            <section class="partner-page__form-card">
                                <h2 class="partner-page__form-title">
                                    "Start Your Partnership Journey"
                                </h2>

                                {move || {
                                    form_error.get().map(|message| {
                                        view! {
                                            <div class="partner-page__error">{message}</div>
                                        }
                                    })
                                }}

                                <form class="partner-page__form" on:submit=on_submit>
                                    <label class="partner-page__label">"Organization type"</label>
                                    <select
                                        class="partner-page__input"
                                        prop:value=move || organization_type.get()
                                        on:change=move |ev| {
                                            organization_type.set(event_target_value(&ev));
                                        }
                                    >
                                        <option value="">"Select organization type"</option>
                                        {ORGANIZATION_TYPES
                                            .iter()
                                            .map(|t| view! { <option value=*t>{*t}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <label class="partner-page__label">"Organization name"</label>
                                    <input
                                        class="partner-page__input"
                                        type="text"
                                        prop:value=move || organization_name.get()
                                        on:input=move |ev| {
                                            organization_name.set(event_target_value(&ev));
                                        }
                                    />

                                    <label class="partner-page__label">"Contact person"</label>
                                    <input
                                        class="partner-page__input"
                                        type="text"
                                        prop:value=move || contact_person.get()
                                        on:input=move |ev| {
                                            contact_person.set(event_target_value(&ev));
                                        }
                                    />

                                    <label class="partner-page__label">"Email address"</label>
                                    <input
                                        class="partner-page__input"
                                        type="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />

                                    <label class="partner-page__label">"Mobile number"</label>
                                    <input
                                        class="partner-page__input"
                                        type="tel"
                                        placeholder="Enter 10-digit mobile number"
                                        prop:value=move || phone.get()
                                        on:input=move |ev| phone.set(event_target_value(&ev))
                                    />

                                    <label class="partner-page__label">"Designation"</label>
                                    <input
                                        class="partner-page__input"
                                        type="text"
                                        placeholder="e.g., CTO, Medical Director"
                                        prop:value=move || designation.get()
                                        on:input=move |ev| designation.set(event_target_value(&ev))
                                    />

                                    <label class="partner-page__label">"Location"</label>
                                    <input
                                        class="partner-page__input"
                                        type="text"
                                        prop:value=move || location.get()
                                        on:input=move |ev| location.set(event_target_value(&ev))
                                    />

                                    <button class="btn btn--primary" type="submit">
                                        "Submit Partnership Inquiry"
                                    </button>
                                </form>
                            </section>
                        }
                    }
                >
                    <section class="partner-page__thanks">
                        <h2 class="partner-page__form-title">"Thank You for Your Interest!"</h2>
                        <p class="partner-page__thanks-text">
                            "Our partnership team will reach out within two business days."
                        </p>
                        <a href="/schedule-demo" class="btn btn--primary">"Schedule a Demo"</a>
                        <a href="/" class="btn btn--outline">"Back to Home"</a>
                    </section>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
