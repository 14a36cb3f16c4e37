//! Account creation with role-specific fields.
//!
//! New accounts start unverified; a successful signup lands on the
//! verification page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use session::{Role, SignupDetails, SignupProfile};

use crate::state::session::SessionContext;
use crate::util::validate::{is_valid_email, is_valid_mobile, required};

/// Raw form values collected before validation.
#[derive(Clone, Debug, Default)]
pub(crate) struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub license_number: String,
    pub facility_name: String,
    pub insurer_name: String,
    pub accepted_terms: bool,
}

/// Structural validation; on success, the profile handed to the session.
pub(crate) fn validate_signup(form: &SignupForm) -> Result<SignupProfile, &'static str> {
    if !required(&form.full_name) {
        return Err("Full name is required.");
    }
    if !is_valid_email(&form.email) {
        return Err("Enter a valid email address.");
    }
    if !is_valid_mobile(&form.phone) {
        return Err("Enter a valid 10-digit mobile number.");
    }
    if form.password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords must match.");
    }
    let Some(role) = form.role else {
        return Err("Select your role.");
    };
    let details = match role {
        Role::Patient => SignupDetails::Patient,
        Role::Doctor => {
            if !required(&form.license_number) {
                return Err("Medical license number is required.");
            }
            SignupDetails::Doctor {
                license_number: form.license_number.trim().to_owned(),
            }
        }
        Role::Hospital => {
            if !required(&form.facility_name) {
                return Err("Hospital name is required.");
            }
            SignupDetails::Hospital {
                facility_name: form.facility_name.trim().to_owned(),
            }
        }
        Role::Insurance => {
            if !required(&form.insurer_name) {
                return Err("Insurance company name is required.");
            }
            SignupDetails::Insurance {
                insurer_name: form.insurer_name.trim().to_owned(),
            }
        }
    };
    if !form.accepted_terms {
        return Err("You must accept the terms and conditions.");
    }
    Ok(SignupProfile {
        email: form.email.trim().to_owned(),
        display_name: form.full_name.trim().to_owned(),
        phone: Some(form.phone.trim().to_owned()),
        details,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = SessionContext::use_context();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let license_number = RwSignal::new(String::new());
    let facility_name = RwSignal::new(String::new());
    let insurer_name = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || session.state.get().busy;

    // A fresh signup produces an unverified identity; send it to verification.
    Effect::new(move || {
        let state = session.state.get();
        if !state.busy {
            if let Some(identity) = state.current {
                let target = if identity.verified { "/dashboard" } else { "/verify-account" };
                navigate(target, NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            full_name: full_name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get(),
            license_number: license_number.get(),
            facility_name: facility_name.get(),
            insurer_name: insurer_name.get(),
            accepted_terms: accepted_terms.get(),
        };
        match validate_signup(&form) {
            Ok(profile) => {
                form_error.set(None);
                session.signup(profile);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-page__card">
                <h1 class="signup-page__brand">"AyuSmat"</h1>
                <h2 class="signup-page__title">"Create your account"</h2>

                {move || {
                    session
                        .state
                        .get()
                        .last_error
                        .map(|message| view! { <div class="signup-page__error">{message}</div> })
                }}
                {move || {
                    form_error.get().map(|message| {
                        view! { <div class="signup-page__error">{message}</div> }
                    })
                }}

                <form class="signup-page__form" on:submit=on_submit>
                    <fieldset class="signup-page__roles">
                        <legend class="signup-page__label">"I am signing up as"</legend>
                        {Role::ALL
                            .iter()
                            .map(|&value| {
                                view! {
                                    <button
                                        type="button"
                                        class="signup-page__role"
                                        class:signup-page__role--selected=move || {
                                            role.get() == Some(value)
                                        }
                                        on:click=move |_| role.set(Some(value))
                                    >
                                        {value.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>

                    <label class="signup-page__label">"Full name"</label>
                    <input
                        class="signup-page__input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />

                    <label class="signup-page__label">"Email address"</label>
                    <input
                        class="signup-page__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="signup-page__label">"Mobile number"</label>
                    <input
                        class="signup-page__input"
                        type="tel"
                        placeholder="Enter 10-digit mobile number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />

                    <Show when=move || role.get() == Some(Role::Doctor)>
                        <label class="signup-page__label">"Medical license number"</label>
                        <input
                            class="signup-page__input"
                            type="text"
                            placeholder="e.g., MED12345"
                            prop:value=move || license_number.get()
                            on:input=move |ev| license_number.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || role.get() == Some(Role::Hospital)>
                        <label class="signup-page__label">"Hospital name"</label>
                        <input
                            class="signup-page__input"
                            type="text"
                            placeholder="Enter hospital name"
                            prop:value=move || facility_name.get()
                            on:input=move |ev| facility_name.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || role.get() == Some(Role::Insurance)>
                        <label class="signup-page__label">"Insurance company"</label>
                        <input
                            class="signup-page__input"
                            type="text"
                            placeholder="Enter company name"
                            prop:value=move || insurer_name.get()
                            on:input=move |ev| insurer_name.set(event_target_value(&ev))
                        />
                    </Show>

                    <label class="signup-page__label">"Password"</label>
                    <input
                        class="signup-page__input"
                        type="password"
                        placeholder="Create a strong password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <label class="signup-page__label">"Confirm password"</label>
                    <input
                        class="signup-page__input"
                        type="password"
                        placeholder="Confirm your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />

                    <label class="signup-page__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || accepted_terms.get()
                            on:change=move |ev| accepted_terms.set(event_target_checked(&ev))
                        />
                        " I agree to the Terms of Service and Privacy Policy"
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="signup-page__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
