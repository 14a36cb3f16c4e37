//! Account verification: email OTP plus optional authenticator enrollment.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::state::session::SessionContext;

#[component]
pub fn VerifyAccountPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="verify-page">
                <Header/>
                <main class="verify-page__main">
                    <VerifyEmailCard/>
                    <SecondFactorCard/>
                </main>
            </div>
        </ProtectedRoute>
    }
}

/// Email verification flow for the signed-in identity.
#[component]
fn VerifyEmailCard() -> impl IntoView {
    let session = SessionContext::use_context();

    let code = RwSignal::new(String::new());
    let code_sent = RwSignal::new(false);

    let busy = move || session.state.get().busy;
    let verified = move || {
        session
            .state
            .get()
            .current
            .is_some_and(|identity| identity.verified)
    };
    let email = move || {
        session
            .state
            .get()
            .current
            .map(|identity| identity.email)
            .unwrap_or_default()
    };

    let on_send = move |_| {
        code_sent.set(true);
        session.request_verification_code(email());
    };
    let on_confirm = move |_| {
        session.confirm_verification_code(email(), code.get());
    };

    view! {
        <section class="verify-page__card">
            <h2 class="verify-page__title">"Verify Your Email"</h2>

            {move || {
                session
                    .state
                    .get()
                    .last_error
                    .map(|message| view! { <div class="verify-page__error">{message}</div> })
            }}

            <Show
                when=verified
                fallback=move || {
                    view! {
                        <p class="verify-page__text">
                            "We'll send a one-time code to " <strong>{email()}</strong>
                        </p>
                        <Show
                            when=move || code_sent.get()
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" disabled=busy on:click=on_send>
                                        {move || {
                                            if busy() { "Sending code..." } else { "Send Verification Code" }
                                        }}
                                    </button>
                                }
                            }
                        >
                            <input
                                class="verify-page__input"
                                type="text"
                                maxlength="6"
                                placeholder="Enter the 6-digit code"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" disabled=busy on:click=on_confirm>
                                {move || if busy() { "Verifying..." } else { "Confirm Code" }}
                            </button>
                            <button class="btn btn--ghost" disabled=busy on:click=on_send>
                                "Resend Code"
                            </button>
                        </Show>
                    }
                }
            >
                <p class="verify-page__success">"Your email is verified."</p>
                <a href="/dashboard" class="btn btn--primary">"Go to Dashboard"</a>
            </Show>
        </section>
    }
}

/// Authenticator-app enrollment with the placeholder provisioning image.
#[component]
fn SecondFactorCard() -> impl IntoView {
    let session = SessionContext::use_context();

    let qr_image = RwSignal::new(None::<String>);
    let token = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<bool>);

    let busy = move || session.state.get().busy;

    let on_enroll = move |_| {
        outcome.set(None);
        session.begin_second_factor_enrollment(qr_image);
    };
    let on_confirm = move |_| {
        session.confirm_second_factor(token.get(), outcome);
    };

    view! {
        <section class="verify-page__card">
            <h2 class="verify-page__title">"Two-Factor Authentication"</h2>
            <p class="verify-page__text">
                "Add an authenticator app for an extra layer of security."
            </p>

            <Show
                when=move || qr_image.get().is_some()
                fallback=move || {
                    view! {
                        <button class="btn btn--outline" disabled=busy on:click=on_enroll>
                            {move || if busy() { "Preparing..." } else { "Set Up Authenticator" }}
                        </button>
                    }
                }
            >
                <img
                    class="verify-page__qr"
                    src=move || qr_image.get().unwrap_or_default()
                    alt="Authenticator provisioning QR code"
                />
                <input
                    class="verify-page__input"
                    type="text"
                    maxlength="6"
                    placeholder="Enter the 6-character token"
                    prop:value=move || token.get()
                    on:input=move |ev| token.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" disabled=busy on:click=on_confirm>
                    {move || if busy() { "Checking..." } else { "Confirm Token" }}
                </button>
                {move || {
                    outcome.get().map(|accepted| {
                        if accepted {
                            view! {
                                <p class="verify-page__success">"Authenticator enabled."</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <p class="verify-page__error">
                                    "That token was not valid. Enter the 6-character code \
                                     from your authenticator app."
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Show>
        </section>
    }
}
