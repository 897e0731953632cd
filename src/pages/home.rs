use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::pricing::UsageBasedPricing;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    let year = Utc::now().year();

    html! {
        <div class="home-page">
            <header class="hero">
                <h1>{"Notification infrastructure for product teams"}</h1>
                <p class="hero-subtitle">
                    {"Design once, deliver everywhere. Herald routes your product \
                      notifications to email, SMS, push and chat from a single API call."}
                </p>
                <a
                    class="hero-cta"
                    href={config::REGISTER_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Sign Up"}
                </a>
            </header>
            <section id="pricing" class="home-section">
                <UsageBasedPricing />
            </section>
            <section id="company" class="home-section">
                <h2>{"Company"}</h2>
                <p>
                    {"Herald is built by a small team that got tired of rebuilding \
                      notification plumbing at every job. We handle the providers, \
                      the preferences and the retries so you can ship the product."}
                </p>
            </section>
            <footer class="home-footer">
                <p>{ format!("© {} Herald", year) }</p>
            </footer>
            <style>
                {r#"
                .home-page {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .hero {
                    padding: 4rem 0 6rem;
                    text-align: center;
                }
                .hero h1 {
                    margin: 0 0 1rem;
                    font-size: 3rem;
                    font-weight: 300;
                    color: var(--text-primary);
                }
                .hero-subtitle {
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    color: var(--text-primary);
                }
                .hero-cta {
                    text-decoration: none;
                    font-size: 0.875rem;
                    padding: 0.75rem 2rem;
                    border: 1px solid var(--berry);
                    border-radius: 9999px;
                    color: #ffffff;
                    background: var(--berry);
                }
                .home-section {
                    padding: 2rem 0;
                }
                .home-section h2 {
                    margin: 0 0 1rem;
                    font-size: 40px;
                    font-weight: 200;
                    color: var(--text-primary);
                }
                .home-footer {
                    padding: 3rem 0 2rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: var(--text-primary);
                }
                @media (max-width: 767px) {
                    .hero {
                        padding: 2rem 0 3rem;
                    }
                    .hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    async fn render_home() -> String {
        yew::ServerRenderer::<Home>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn anchors_exist_for_the_nav_fragments() {
        let rendered = render_home().await;
        assert!(rendered.contains(r#"id="pricing""#));
        assert!(rendered.contains(r#"id="company""#));
    }

    #[tokio::test]
    async fn pricing_section_is_embedded() {
        let rendered = render_home().await;
        assert!(rendered.contains("Usage Based Pricing"));
    }

    #[tokio::test]
    async fn footer_shows_the_current_year() {
        let rendered = render_home().await;
        let year = Utc::now().year().to_string();
        assert!(rendered.contains(&format!("© {} Herald", year)));
    }
}
