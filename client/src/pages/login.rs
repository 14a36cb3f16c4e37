//! Sign-in page: role picker, password form, and the OTP alternative.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use session::Role;

use crate::state::session::SessionContext;
use crate::util::validate::{is_valid_email, required};

struct RoleOption {
    role: Role,
    description: &'static str,
}

const ROLE_OPTIONS: &[RoleOption] = &[
    RoleOption { role: Role::Patient, description: "Access your health records" },
    RoleOption { role: Role::Doctor, description: "Manage patient care" },
    RoleOption { role: Role::Hospital, description: "Hospital administration" },
    RoleOption { role: Role::Insurance, description: "Process claims & policies" },
];

/// A submittable password login: valid email, non-empty password, role chosen.
pub(crate) fn login_form_valid(email: &str, password: &str, role: Option<Role>) -> bool {
    is_valid_email(email) && required(password) && role.is_some()
}

/// A submittable OTP code: exactly six ASCII digits.
pub(crate) fn otp_ready(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::use_context();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let form_error = RwSignal::new(None::<&'static str>);

    let show_otp = RwSignal::new(false);
    let otp_sent = RwSignal::new(false);
    let otp = RwSignal::new(String::new());

    let busy = move || session.state.get().busy;

    // Land on the dashboard once a session exists.
    Effect::new(move || {
        let state = session.state.get();
        if !state.busy && state.current.is_some() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let selected = role.get();
        if !login_form_valid(&email.get(), &password.get(), selected) {
            form_error.set(Some("Enter a valid email, your password, and select a role."));
            return;
        }
        form_error.set(None);
        let Some(selected) = selected else { return };
        session.login(email.get(), password.get(), selected);
    };

    let on_send_otp = move |_| {
        if !is_valid_email(&email.get()) {
            form_error.set(Some("Enter a valid email to receive a code."));
            return;
        }
        form_error.set(None);
        otp_sent.set(true);
        session.request_verification_code(email.get());
    };

    // Code confirmation verifies an existing session; it never creates one.
    // With nobody signed in this surfaces the "sign in again" message, so
    // the OTP path is a verification aid, not a password-free login.
    let on_verify_otp = move |_| {
        session.confirm_verification_code(email.get(), otp.get());
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__brand">"AyuSmat"</h1>
                <h2 class="login-page__title">"Sign in to your account"</h2>
                <p class="login-page__subtitle">"Access your healthcare dashboard securely"</p>

                {move || {
                    session
                        .state
                        .get()
                        .last_error
                        .map(|message| view! { <div class="login-page__error">{message}</div> })
                }}
                {move || {
                    form_error.get().map(|message| {
                        view! { <div class="login-page__error">{message}</div> }
                    })
                }}

                <Show
                    when=move || !show_otp.get()
                    fallback=move || {
                        view! {
                            <div class="login-page__otp">
                                <h3 class="login-page__otp-title">
                                    {move || if otp_sent.get() { "Enter OTP" } else { "Login with OTP" }}
                                </h3>
                                <p class="login-page__otp-hint">
                                    {move || {
                                        if otp_sent.get() {
                                            "Enter the 6-digit code sent to your email"
                                        } else {
                                            "We'll send a verification code to your email"
                                        }
                                    }}
                                </p>
                                <input
                                    class="login-page__input"
                                    type="email"
                                    placeholder="Email address"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <Show
                                    when=move || otp_sent.get()
                                    fallback=move || {
                                        view! {
                                            <button
                                                class="btn btn--primary"
                                                disabled=busy
                                                on:click=on_send_otp
                                            >
                                                {move || if busy() { "Sending OTP..." } else { "Send OTP" }}
                                            </button>
                                        }
                                    }
                                >
                                    <input
                                        class="login-page__input"
                                        type="text"
                                        maxlength="6"
                                        placeholder="6-digit code"
                                        prop:value=move || otp.get()
                                        on:input=move |ev| otp.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || busy() || !otp_ready(&otp.get())
                                        on:click=on_verify_otp
                                    >
                                        {move || if busy() { "Verifying..." } else { "Verify OTP" }}
                                    </button>
                                    <button class="btn btn--ghost" disabled=busy on:click=on_send_otp>
                                        "Resend OTP"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                >
                    <form class="login-page__form" on:submit=on_submit>
                        <fieldset class="login-page__roles">
                            <legend class="login-page__label">"I am a"</legend>
                            {ROLE_OPTIONS
                                .iter()
                                .map(|option| {
                                    let value = option.role;
                                    view! {
                                        <button
                                            type="button"
                                            class="login-page__role"
                                            class:login-page__role--selected=move || {
                                                role.get() == Some(value)
                                            }
                                            on:click=move |_| role.set(Some(value))
                                        >
                                            <span class="login-page__role-name">{value.label()}</span>
                                            <span class="login-page__role-hint">{option.description}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </fieldset>

                        <label class="login-page__label">"Email address"</label>
                        <input
                            class="login-page__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />

                        <label class="login-page__label">"Password"</label>
                        <input
                            class="login-page__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />

                        <button class="btn btn--primary" type="submit" disabled=busy>
                            {move || if busy() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>

                <button
                    class="login-page__toggle"
                    on:click=move |_| {
                        show_otp.update(|v| *v = !*v);
                        otp_sent.set(false);
                        otp.set(String::new());
                    }
                >
                    {move || if show_otp.get() { "Login with Password" } else { "Login with OTP" }}
                </button>

                <p class="login-page__footer">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
