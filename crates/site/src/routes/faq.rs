//! FAQ page with categorized questions.
//!
//! The question bank is compiled in. Rendering is a plain accordion built on
//! `<details>` elements, so no scripting is involved.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

/// One FAQ entry.
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A named group of FAQ entries.
pub struct FaqCategory {
    pub name: &'static str,
    pub items: Vec<FaqItem>,
}

/// FAQ page template.
#[derive(Template, WebTemplate)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub categories: Vec<FaqCategory>,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the FAQ page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    FaqTemplate {
        categories: faq_categories(),
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}

/// The full question bank, grouped by category.
#[must_use]
pub fn faq_categories() -> Vec<FaqCategory> {
    vec![
        FaqCategory {
            name: "About Our Service",
            items: vec![
                FaqItem {
                    question: "What is InternetOne?",
                    answer: "InternetOne is an independent comparison and connection service that helps consumers explore and compare internet and TV options from various providers. We are not a provider ourselves; we help you understand your options and connect with providers when you are ready.",
                },
                FaqItem {
                    question: "Is InternetOne affiliated with any internet or TV provider?",
                    answer: "No, InternetOne is completely independent and is not affiliated with, endorsed by, or sponsored by any internet or TV provider including Verizon, Spectrum, AT&T, or Optimum. We present information from multiple providers to help you make an informed decision.",
                },
                FaqItem {
                    question: "How does InternetOne make money?",
                    answer: "We may receive compensation when you connect with a provider through our service. This allows us to offer our comparison assistance at no cost to you. Our recommendations are based on matching your needs with available options, regardless of compensation arrangements.",
                },
                FaqItem {
                    question: "Is there a fee to use InternetOne?",
                    answer: "No, our comparison and consultation service is free for consumers. You only pay for the services you ultimately choose to purchase from the provider directly.",
                },
            ],
        },
        FaqCategory {
            name: "Availability & Pricing",
            items: vec![
                FaqItem {
                    question: "How do I know if a provider is available at my address?",
                    answer: "Internet and TV availability varies by location. When you call our specialists, we can help check which providers service your specific address based on the information we have available. You can also verify directly with providers.",
                },
                FaqItem {
                    question: "Why do prices vary by location?",
                    answer: "Providers set different prices based on many factors including local competition, infrastructure costs, regional promotions, and franchise agreements. That is why it is important to verify pricing for your specific address rather than relying on advertised rates.",
                },
                FaqItem {
                    question: "Are the prices on your website guaranteed?",
                    answer: "No, the prices shown on our website are examples and may not reflect current offers in your area. Actual pricing depends on your location, promotional periods, equipment selections, and other factors. Always confirm pricing directly before making a commitment.",
                },
                FaqItem {
                    question: "Do promotional prices last forever?",
                    answer: "No, promotional prices typically last for a specified period (often 12-24 months) after which the price may increase to the regular rate. We recommend asking about both the promotional price and the regular rate when speaking with providers.",
                },
            ],
        },
        FaqCategory {
            name: "Internet Service",
            items: vec![
                FaqItem {
                    question: "What internet speed do I need?",
                    answer: "The speed you need depends on your household usage. For basic browsing and email, 25-50 Mbps may suffice. For streaming HD video on multiple devices, consider 100-200 Mbps. For heavy streaming, gaming, and working from home, 300+ Mbps may be appropriate. Our specialists can help you assess your needs.",
                },
                FaqItem {
                    question: "What is the difference between cable, fiber, and DSL internet?",
                    answer: "Fiber optic internet uses light signals through glass fibers and typically offers the fastest, most reliable speeds. Cable internet uses coaxial cables (same as cable TV) and offers widely available high speeds. DSL uses telephone lines and is broadly available but typically slower. Each technology has different availability depending on your location.",
                },
                FaqItem {
                    question: "What are data caps?",
                    answer: "Data caps limit how much data you can use each month. If you exceed the cap, you may incur additional charges or have your speed reduced. Many providers offer plans without data caps, especially on fiber connections. Ask about data policies when comparing plans.",
                },
                FaqItem {
                    question: "Do I need to rent equipment from the provider?",
                    answer: "Most providers offer equipment (modem, router) for a monthly rental fee. Some include equipment at no extra cost. In many cases, you may be able to purchase compatible equipment instead of renting, which can save money over time. Ask about equipment options and compatibility.",
                },
            ],
        },
        FaqCategory {
            name: "TV Service",
            items: vec![
                FaqItem {
                    question: "What is the difference between cable TV and streaming TV?",
                    answer: "Traditional cable TV delivers channels through a cable connection and typically requires a cable box. Streaming TV delivers content over the internet and can be watched on smart TVs, streaming devices, or mobile apps. Many providers now offer both options.",
                },
                FaqItem {
                    question: "Can I customize my channel lineup?",
                    answer: "Options vary by provider. Some offer customizable packages where you can add specific channel groups. Others have fixed packages at different tiers. Ask about available customization when speaking with providers.",
                },
                FaqItem {
                    question: "What about DVR service?",
                    answer: "Most TV providers offer DVR (Digital Video Recording) capabilities to record and store shows. Some include DVR with their packages while others charge an additional monthly fee. Cloud DVR is also available from many providers, storing recordings in the cloud rather than on a physical device.",
                },
            ],
        },
        FaqCategory {
            name: "Installation & Setup",
            items: vec![
                FaqItem {
                    question: "Is professional installation required?",
                    answer: "It depends on the provider and your situation. Many providers offer both professional installation and self-installation options. Fiber internet often requires professional installation for the initial connection. Ask about installation options and any associated costs.",
                },
                FaqItem {
                    question: "How long does installation take?",
                    answer: "Standard installations typically take 1-3 hours depending on the services and complexity. Fiber installation may take longer if running new lines is required. Scheduling can range from a few days to a couple of weeks depending on availability in your area.",
                },
                FaqItem {
                    question: "Is there an installation fee?",
                    answer: "Installation fees vary by provider and are sometimes waived during promotional periods. Professional installation may cost $50-$100+ while self-installation is often free. Ask about current installation offers when comparing plans.",
                },
            ],
        },
        FaqCategory {
            name: "Contracts & Billing",
            items: vec![
                FaqItem {
                    question: "Do I need to sign a contract?",
                    answer: "Contract requirements vary by provider and plan. Some providers offer month-to-month service while others may require 1-2 year agreements for certain promotional rates. Plans with contracts may have early termination fees if you cancel before the term ends. Always ask about contract terms before signing up.",
                },
                FaqItem {
                    question: "What fees should I expect on my bill?",
                    answer: "Beyond the monthly service fee, you may see charges for equipment rental, regional sports fees, broadcast TV fees, taxes, and other regulatory fees. These can add $10-$30+ to your monthly bill. Ask for a complete breakdown of expected charges when comparing options.",
                },
                FaqItem {
                    question: "Can I cancel service at any time?",
                    answer: "If you have month-to-month service, you can typically cancel anytime without penalty. If you have a contract, early cancellation may result in termination fees. Understand your contract terms before signing up so there are no surprises.",
                },
            ],
        },
    ]
}
