//! Landing hero with headline, primary actions, and the adoption stats band.

use leptos::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "10M+", label: "Health IDs Created" },
    Stat { value: "5,000+", label: "Partner Hospitals" },
    Stat { value: "50+", label: "Insurance Partners" },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__content">
                    <h1 class="hero__title">
                        "Seamless Healthcare,"
                        <span class="hero__title-accent">"One ID for a Lifetime"</span>
                    </h1>
                    <p class="hero__lede">
                        "AyuSmat is a digital health ecosystem where every person gets a \
                         lifelong Unique Health ID (UHID). All your health records are \
                         stored digitally and accessed securely by doctors, hospitals, \
                         insurers, and government."
                    </p>

                    <div class="hero__actions">
                        <a href="/get-health-id" class="btn btn--primary">
                            "Get Your Health ID Today"
                        </a>
                        <a href="/discover-schemes" class="btn btn--outline">
                            "Discover Health Schemes"
                        </a>
                    </div>

                    <div class="hero__stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero__stat">
                                        <div class="hero__stat-value">{stat.value}</div>
                                        <div class="hero__stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
