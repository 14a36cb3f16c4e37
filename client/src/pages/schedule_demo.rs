//! Demo booking form for prospective partner organizations.

#[cfg(test)]
#[path = "schedule_demo_test.rs"]
mod schedule_demo_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::util::validate::{is_valid_email, is_valid_mobile, required};

const DEMO_TYPES: &[&str] = &[
    "Platform Overview",
    "Hospital Integration",
    "Insurance Workflow",
    "Government Analytics",
];

const TIME_SLOTS: &[&str] = &["10:00 AM", "12:00 PM", "02:00 PM", "04:00 PM"];

/// Raw booking fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct DemoRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub demo_type: String,
}

pub(crate) fn validate_request(request: &DemoRequest) -> Result<(), &'static str> {
    if !required(&request.name) {
        return Err("Name is required.");
    }
    if !is_valid_email(&request.email) {
        return Err("Enter a valid email address.");
    }
    if !is_valid_mobile(&request.phone) {
        return Err("Enter a valid 10-digit mobile number.");
    }
    if !required(&request.organization) {
        return Err("Organization name is required.");
    }
    if !required(&request.role) {
        return Err("Your role is required.");
    }
    if !required(&request.preferred_date) {
        return Err("Pick a preferred date.");
    }
    if !required(&request.preferred_time) {
        return Err("Pick a preferred time.");
    }
    if !required(&request.demo_type) {
        return Err("Select a demo type.");
    }
    Ok(())
}

#[component]
pub fn ScheduleDemoPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let preferred_date = RwSignal::new(String::new());
    let preferred_time = RwSignal::new(String::new());
    let demo_type = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = DemoRequest {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            organization: organization.get(),
            role: role.get(),
            preferred_date: preferred_date.get(),
            preferred_time: preferred_time.get(),
            demo_type: demo_type.get(),
        };
        match validate_request(&request) {
            Ok(()) => {
                form_error.set(None);
                submitted.set(true);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="demo-page">
            <Header/>
            <main class="demo-page__main">
                <h1 class="demo-page__title">"Schedule a Demo"</h1>

                <Show
                    when=move || submitted.get()
                    fallback=move || {
                        view! {
                            <section class="demo-page__form-card">
                                <h2 class="demo-page__form-title">"Book Your Demo Session"</h2>

                                {move || {
                                    form_error.get().map(|message| {
                                        view! { <div class="demo-page__error">{message}</div> }
                                    })
                                }}

                                <form class="demo-page__form" on:submit=on_submit>
                                    <label class="demo-page__label">"Full name"</label>
                                    <input
                                        class="demo-page__input"
                                        type="text"
                                        placeholder="Enter your full name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Email address"</label>
                                    <input
                                        class="demo-page__input"
                                        type="email"
                                        placeholder="Enter your email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Mobile number"</label>
                                    <input
                                        class="demo-page__input"
                                        type="tel"
                                        placeholder="Enter 10-digit mobile number"
                                        prop:value=move || phone.get()
                                        on:input=move |ev| phone.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Organization"</label>
                                    <input
                                        class="demo-page__input"
                                        type="text"
                                        placeholder="Enter organization name"
                                        prop:value=move || organization.get()
                                        on:input=move |ev| organization.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Your role"</label>
                                    <input
                                        class="demo-page__input"
                                        type="text"
                                        placeholder="e.g., CTO, Medical Director"
                                        prop:value=move || role.get()
                                        on:input=move |ev| role.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Preferred date"</label>
                                    <input
                                        class="demo-page__input"
                                        type="date"
                                        prop:value=move || preferred_date.get()
                                        on:input=move |ev| preferred_date.set(event_target_value(&ev))
                                    />

                                    <label class="demo-page__label">"Preferred time"</label>
                                    <select
                                        class="demo-page__input"
                                        prop:value=move || preferred_time.get()
                                        on:change=move |ev| preferred_time.set(event_target_value(&ev))
                                    >
                                        <option value="">"Select a time slot"</option>
                                        {TIME_SLOTS
                                            .iter()
                                            .map(|slot| view! { <option value=*slot>{*slot}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <label class="demo-page__label">"Demo type"</label>
                                    <select
                                        class="demo-page__input"
                                        prop:value=move || demo_type.get()
                                        on:change=move |ev| demo_type.set(event_target_value(&ev))
                                    >
                                        <option value="">"Select demo type"</option>
                                        {DEMO_TYPES
                                            .iter()
                                            .map(|t| view! { <option value=*t>{*t}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <button class="btn btn--primary" type="submit">
                                        "Schedule Demo"
                                    </button>
                                </form>
                            </section>
                        }
                    }
                >
                    <section class="demo-page__thanks">
                        <h2 class="demo-page__form-title">"Demo Scheduled Successfully!"</h2>
                        <p class="demo-page__thanks-text">
                            "A calendar invite and joining details are on their way to your email."
                        </p>
                        <a href="/partner-with-us" class="btn btn--primary">"Partner With AyuSmat"</a>
                        <a href="/" class="btn btn--outline">"Back to Home"</a>
                    </section>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
