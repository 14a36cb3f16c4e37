//! Health scheme catalog with search and filter controls.

#[cfg(test)]
#[path = "discover_schemes_test.rs"]
mod discover_schemes_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

pub(crate) struct Scheme {
    pub name: &'static str,
    pub description: &'static str,
    pub coverage: &'static str,
    pub category: &'static str,
    pub eligibility: &'static str,
    pub states: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub(crate) const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "Ayushman Bharat - Pradhan Mantri Jan Arogya Yojana (PM-JAY)",
        description: "World's largest health insurance scheme providing coverage up to ₹5 lakh per family per year",
        coverage: "₹5,00,000",
        category: "Government",
        eligibility: "BPL families, rural & urban poor",
        states: &["All States"],
        benefits: &["Cashless treatment", "Pre & post hospitalization", "Day care procedures", "Emergency care"],
    },
    Scheme {
        name: "Rashtriya Swasthya Bima Yojana (RSBY)",
        description: "Health insurance scheme for Below Poverty Line (BPL) families in the unorganized sector",
        coverage: "₹30,000",
        category: "Government",
        eligibility: "BPL families",
        states: &["Bihar", "Uttar Pradesh", "Madhya Pradesh", "Rajasthan"],
        benefits: &["Smart card based", "Cashless treatment", "Pre-existing diseases covered", "Maternity benefits"],
    },
    Scheme {
        name: "Chief Minister's Comprehensive Health Insurance Scheme",
        description: "State-specific comprehensive health insurance with enhanced coverage for critical illnesses",
        coverage: "₹4,00,000 - ₹15,00,000",
        category: "State Government",
        eligibility: "State residents, income criteria varies",
        states: &["Tamil Nadu", "Andhra Pradesh", "Telangana", "Karnataka"],
        benefits: &["Critical illness cover", "Organ transplant", "Cancer treatment", "Cardiac procedures"],
    },
    Scheme {
        name: "Janani Suraksha Yojana (JSY)",
        description: "Safe motherhood intervention promoting institutional delivery among poor pregnant women",
        coverage: "₹1,400 - ₹1,000",
        category: "Maternal Health",
        eligibility: "Pregnant women from BPL families",
        states: &["All States"],
        benefits: &["Cash assistance", "Free delivery", "Post-natal care", "Transport allowance"],
    },
    Scheme {
        name: "Pradhan Mantri Surakshit Matritva Abhiyan (PMSMA)",
        description: "Comprehensive antenatal care services to pregnant women on 9th of every month",
        coverage: "Free Services",
        category: "Maternal Health",
        eligibility: "All pregnant women",
        states: &["All States"],
        benefits: &["Free check-ups", "High-risk pregnancy identification", "Specialist consultation", "Referral services"],
    },
    Scheme {
        name: "Aam Aadmi Bima Yojana (AABY)",
        description: "Life insurance scheme for rural landless households and marginalized families",
        coverage: "₹30,000",
        category: "Life Insurance",
        eligibility: "Rural landless households, marginalized families",
        states: &["All States"],
        benefits: &["Natural death benefit", "Accidental death benefit", "Disability benefit", "Scholarship for children"],
    },
];

const CATEGORIES: &[&str] = &[
    "All",
    "Government",
    "State Government",
    "Maternal Health",
    "Life Insurance",
    "Child Health",
    "Senior Citizens",
];

const STATES: &[&str] = &[
    "All States",
    "Bihar",
    "Delhi",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Uttar Pradesh",
    "Rajasthan",
];

const ELIGIBILITY_OPTIONS: &[&str] = &[
    "All",
    "BPL families",
    "All citizens",
    "Pregnant women",
    "Senior citizens",
    "Children",
];

/// Search and filter criteria for the catalog.
#[derive(Clone, Debug, Default)]
pub(crate) struct SchemeFilter {
    pub search: String,
    pub state: String,
    pub category: String,
    pub eligibility: String,
}

/// Applies search text plus the three dropdown filters. Empty or "All"
/// selections do not constrain; schemes tagged "All States" match any
/// state selection.
pub(crate) fn filter_schemes<'a>(schemes: &'a [Scheme], filter: &SchemeFilter) -> Vec<&'a Scheme> {
    let search = filter.search.trim().to_lowercase();
    schemes
        .iter()
        .filter(|scheme| {
            let matches_search = search.is_empty()
                || scheme.name.to_lowercase().contains(&search)
                || scheme.description.to_lowercase().contains(&search);
            let matches_state = filter.state.is_empty()
                || filter.state == "All States"
                || scheme.states.contains(&filter.state.as_str())
                || scheme.states.contains(&"All States");
            let matches_category = filter.category.is_empty()
                || filter.category == "All"
                || scheme.category == filter.category;
            let matches_eligibility = filter.eligibility.is_empty()
                || filter.eligibility == "All"
                || scheme
                    .eligibility
                    .to_lowercase()
                    .contains(&filter.eligibility.to_lowercase());
            matches_search && matches_state && matches_category && matches_eligibility
        })
        .collect()
}

#[component]
pub fn DiscoverSchemesPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let eligibility = RwSignal::new(String::new());

    let filtered = move || {
        filter_schemes(
            SCHEMES,
            &SchemeFilter {
                search: search.get(),
                state: state.get(),
                category: category.get(),
                eligibility: eligibility.get(),
            },
        )
    };

    view! {
        <div class="schemes-page">
            <Header/>
            <main class="schemes-page__main">
                <h1 class="schemes-page__title">"Discover Health Schemes"</h1>
                <p class="schemes-page__lede">
                    "Find government and private health schemes you're eligible for."
                </p>

                <div class="schemes-page__filters">
                    <input
                        class="schemes-page__search"
                        type="search"
                        placeholder="Search schemes"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="schemes-page__select"
                        prop:value=move || state.get()
                        on:change=move |ev| state.set(event_target_value(&ev))
                    >
                        {STATES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="schemes-page__select"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="schemes-page__select"
                        prop:value=move || eligibility.get()
                        on:change=move |ev| eligibility.set(event_target_value(&ev))
                    >
                        {ELIGIBILITY_OPTIONS
                            .iter()
                            .map(|e| view! { <option value=*e>{*e}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                {move || {
                    let hits = filtered();
                    if hits.is_empty() {
                        view! {
                            <div class="schemes-page__empty">
                                <p>"No schemes match your criteria."</p>
                                <p>"Try adjusting your search criteria or filters."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="schemes-page__grid">
                                {hits
                                    .into_iter()
                                    .map(|scheme| {
                                        view! {
                                            <div class="schemes-page__card">
                                                <h3 class="schemes-page__card-title">{scheme.name}</h3>
                                                <p class="schemes-page__card-text">
                                                    {scheme.description}
                                                </p>
                                                <p class="schemes-page__card-coverage">
                                                    "Coverage: " {scheme.coverage}
                                                </p>
                                                <p class="schemes-page__card-meta">
                                                    {scheme.category} " · " {scheme.eligibility}
                                                </p>
                                                <ul class="schemes-page__benefits">
                                                    {scheme
                                                        .benefits
                                                        .iter()
                                                        .map(|b| view! { <li>{*b}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
            <Footer/>
        </div>
    }
}
