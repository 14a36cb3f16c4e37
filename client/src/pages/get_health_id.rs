//! Three-step UHID registration flow.
//!
//! Step 1 collects personal details, step 2 address and contact details,
//! and step 3 shows the freshly generated UHID. Nothing is persisted;
//! the flow exists to demonstrate assisted registration.

#[cfg(test)]
#[path = "get_health_id_test.rs"]
mod get_health_id_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::util::validate::{is_valid_email, is_valid_mobile, is_valid_pincode, required};

const STEP_TITLES: &[&str] = &["Personal Information", "Address & Contact Details", "UHID Generated"];

/// Step 1 fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
}

/// Step 2 fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub district: String,
    pub emergency_contact: String,
}

pub(crate) fn validate_personal(info: &PersonalInfo) -> Result<(), &'static str> {
    if !required(&info.first_name) {
        return Err("First name is required.");
    }
    if !required(&info.last_name) {
        return Err("Last name is required.");
    }
    if !required(&info.date_of_birth) {
        return Err("Date of birth is required.");
    }
    if !required(&info.gender) {
        return Err("Gender is required.");
    }
    Ok(())
}

pub(crate) fn validate_contact(info: &ContactInfo) -> Result<(), &'static str> {
    if !is_valid_mobile(&info.phone) {
        return Err("Enter a valid 10-digit mobile number.");
    }
    if !is_valid_email(&info.email) {
        return Err("Enter a valid email address.");
    }
    if !required(&info.address) {
        return Err("Address is required.");
    }
    if !is_valid_pincode(&info.pincode) {
        return Err("Enter a valid 6-digit pincode.");
    }
    if !required(&info.state) {
        return Err("State is required.");
    }
    if !required(&info.district) {
        return Err("District is required.");
    }
    if !is_valid_mobile(&info.emergency_contact) {
        return Err("Enter a valid emergency contact number.");
    }
    Ok(())
}

/// A fresh UHID: 13 digits plus a 4-character uppercase suffix.
pub(crate) fn generate_uhid() -> String {
    let id = Uuid::new_v4().as_u128();
    let digits = id % 10_000_000_000_000;
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("UHID{digits:013}{suffix}")
}

#[component]
pub fn GetHealthIdPage() -> impl IntoView {
    let step = RwSignal::new(1_usize);
    let form_error = RwSignal::new(None::<&'static str>);
    let generated_uhid = RwSignal::new(String::new());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());

    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let emergency_contact = RwSignal::new(String::new());

    let on_next = move |_| {
        let info = PersonalInfo {
            first_name: first_name.get(),
            last_name: last_name.get(),
            date_of_birth: date_of_birth.get(),
            gender: gender.get(),
        };
        match validate_personal(&info) {
            Ok(()) => {
                form_error.set(None);
                step.set(2);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let on_generate = move |_| {
        let info = ContactInfo {
            phone: phone.get(),
            email: email.get(),
            address: address.get(),
            pincode: pincode.get(),
            state: state.get(),
            district: district.get(),
            emergency_contact: emergency_contact.get(),
        };
        match validate_contact(&info) {
            Ok(()) => {
                form_error.set(None);
                generated_uhid.set(generate_uhid());
                step.set(3);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="uhid-page">
            <Header/>
            <main class="uhid-page__main">
                <h1 class="uhid-page__title">"Get Your Health ID"</h1>
                <p class="uhid-page__lede">
                    "Create your lifetime Unique Health ID (UHID) in just a few simple steps."
                </p>

                <ol class="uhid-page__steps">
                    {STEP_TITLES
                        .iter()
                        .enumerate()
                        .map(|(index, title)| {
                            let number = index + 1;
                            view! {
                                <li
                                    class="uhid-page__step"
                                    class:uhid-page__step--active=move || { step.get() >= number }
                                >
                                    {*title}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>

                {move || {
                    form_error.get().map(|message| {
                        view! { <div class="uhid-page__error">{message}</div> }
                    })
                }}

                <Show when=move || step.get() == 1>
                    <section class="uhid-page__form">
                        <h2 class="uhid-page__form-title">"Personal Information"</h2>

                        <label class="uhid-page__label">"First name"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Last name"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Date of birth"</label>
                        <input
                            class="uhid-page__input"
                            type="date"
                            prop:value=move || date_of_birth.get()
                            on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Gender"</label>
                        <select
                            class="uhid-page__input"
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="">"Select gender"</option>
                            <option value="female">"Female"</option>
                            <option value="male">"Male"</option>
                            <option value="other">"Other"</option>
                        </select>

                        <button class="btn btn--primary" on:click=on_next>
                            "Continue"
                        </button>
                    </section>
                </Show>

                <Show when=move || step.get() == 2>
                    <section class="uhid-page__form">
                        <h2 class="uhid-page__form-title">"Address & Contact Details"</h2>

                        <label class="uhid-page__label">"Mobile number"</label>
                        <input
                            class="uhid-page__input"
                            type="tel"
                            placeholder="Enter 10-digit mobile number"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Email address"</label>
                        <input
                            class="uhid-page__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Address"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Pincode"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            maxlength="6"
                            prop:value=move || pincode.get()
                            on:input=move |ev| pincode.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"State"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            prop:value=move || state.get()
                            on:input=move |ev| state.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"District"</label>
                        <input
                            class="uhid-page__input"
                            type="text"
                            prop:value=move || district.get()
                            on:input=move |ev| district.set(event_target_value(&ev))
                        />

                        <label class="uhid-page__label">"Emergency contact"</label>
                        <input
                            class="uhid-page__input"
                            type="tel"
                            placeholder="Enter 10-digit mobile number"
                            prop:value=move || emergency_contact.get()
                            on:input=move |ev| emergency_contact.set(event_target_value(&ev))
                        />

                        <div class="uhid-page__actions">
                            <button class="btn btn--ghost" on:click=move |_| step.set(1)>
                                "Back"
                            </button>
                            <button class="btn btn--primary" on:click=on_generate>
                                "Generate My UHID"
                            </button>
                        </div>
                    </section>
                </Show>

                <Show when=move || step.get() == 3>
                    <section class="uhid-page__result">
                        <h2 class="uhid-page__form-title">"Your UHID is Ready"</h2>
                        <p class="uhid-page__uhid">{move || generated_uhid.get()}</p>
                        <p class="uhid-page__result-note">
                            "Save this ID. It stays with you for life and works at every \
                             partner hospital, clinic, and insurer."
                        </p>
                        <a href="/signup" class="btn btn--primary">"Create Your Account"</a>
                    </section>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
