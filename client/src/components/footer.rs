//! Site footer with quick links and contact details.

use leptos::prelude::*;

struct LinkGroup {
    title: &'static str,
    links: &'static [&'static str],
}

const LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Quick Links",
        links: &["Features", "How It Works", "For Patients", "For Hospitals", "Rural Health", "About Us"],
    },
    LinkGroup {
        title: "Support",
        links: &["Help Center", "FAQ", "Privacy Policy", "Terms of Service", "Data Security", "Accessibility"],
    },
];

/// Marketing footer shared by every public page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__about">
                    <h3 class="footer__brand">"AyuSmat"</h3>
                    <p class="footer__tagline">
                        "Transforming healthcare in India with lifetime health IDs, making \
                         quality healthcare accessible to every citizen."
                    </p>
                </div>

                {LINK_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer__group">
                                <h3 class="footer__group-title">{group.title}</h3>
                                <ul class="footer__links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href="#" class="footer__link">{*link}</a></li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}

                <div class="footer__contact">
                    <h3 class="footer__group-title">"Contact Us"</h3>
                    <p class="footer__contact-line">"Helpline: 1800-123-AYUS (2987)"</p>
                    <p class="footer__contact-note">"24/7 Support in 22 languages"</p>
                    <p class="footer__contact-line">"support@ayusmat.gov.in"</p>
                    <p class="footer__contact-line">
                        "Ministry of Health & Family Welfare"<br/>
                        "Nirman Bhavan, New Delhi - 110011"
                    </p>
                </div>
            </div>
        </footer>
    }
}
