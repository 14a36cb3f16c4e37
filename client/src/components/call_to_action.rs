//! Closing call-to-action band with per-audience entry points.

use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta__inner">
                <h2 class="cta__title">"Ready to Transform Your Healthcare Experience?"</h2>
                <p class="cta__lede">
                    "Join millions of Indians who are already experiencing seamless \
                     healthcare with AyuSmat"
                </p>

                <div class="cta__cards">
                    <div class="cta__card">
                        <h3 class="cta__card-title">"For Citizens"</h3>
                        <p class="cta__card-text">
                            "Get your lifelong health ID and take control of your medical records."
                        </p>
                        <a href="/get-health-id" class="btn btn--primary">
                            "Get Your Health ID Today"
                        </a>
                        <a href="/discover-schemes" class="btn btn--outline">
                            "Discover Health Schemes"
                        </a>
                    </div>

                    <div class="cta__card">
                        <h3 class="cta__card-title">"For Healthcare Providers"</h3>
                        <p class="cta__card-text">
                            "Partner with AyuSmat to streamline operations and improve patient care."
                        </p>
                        <a href="/partner-with-us" class="btn btn--primary">
                            "Partner With AyuSmat"
                        </a>
                        <a href="/schedule-demo" class="btn btn--outline">
                            "Schedule a Demo"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
