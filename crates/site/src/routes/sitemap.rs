//! Human-readable sitemap page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

/// A sitemap entry.
pub struct SiteLink {
    pub name: String,
    pub href: String,
    pub description: String,
}

/// A titled group of sitemap entries.
pub struct SiteSection {
    pub title: &'static str,
    pub links: Vec<SiteLink>,
}

/// Sitemap page template.
#[derive(Template, WebTemplate)]
#[template(path = "sitemap.html")]
pub struct SitemapTemplate {
    pub sections: Vec<SiteSection>,
}

fn link(name: &str, href: &str, description: &str) -> SiteLink {
    SiteLink {
        name: name.to_string(),
        href: href.to_string(),
        description: description.to_string(),
    }
}

/// Display the sitemap. Provider links come from the catalog so the page
/// stays in step with the lineup.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state
        .catalog()
        .providers()
        .iter()
        .map(|p| {
            link(
                &p.name,
                &format!("/providers/{}", p.slug),
                &format!("Explore {} plans", p.name),
            )
        })
        .collect();

    let sections = vec![
        SiteSection {
            title: "Main Pages",
            links: vec![
                link("Home", "/", "Compare internet and TV providers"),
                link("Compare Plans", "/compare", "Side-by-side plan comparison"),
                link("Current Deals", "/deals", "Latest promotions and offers"),
                link("TV Packages", "/tv", "Television service options"),
                link("Bundle Deals", "/bundles", "Internet + TV bundle packages"),
            ],
        },
        SiteSection {
            title: "Internet Providers",
            links: providers,
        },
        SiteSection {
            title: "About Us",
            links: vec![
                link("Why Choose Us", "/why-us", "Benefits of our service"),
                link("About", "/about", "Learn about our company"),
                link("Contact Us", "/contact", "Get in touch with our team"),
                link("FAQ", "/faq", "Frequently asked questions"),
            ],
        },
        SiteSection {
            title: "Legal & Compliance",
            links: vec![
                link("Privacy Policy", "/privacy-policy", "How we handle your data"),
                link(
                    "Terms and Conditions",
                    "/terms-and-conditions",
                    "Terms of use",
                ),
                link("Disclosures", "/disclosures", "How we make money"),
                link(
                    "Accessibility",
                    "/accessibility",
                    "Our accessibility commitment",
                ),
            ],
        },
    ];

    SitemapTemplate { sections }
}
