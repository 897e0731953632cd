use yew::prelude::*;

use crate::components::pricing_line::PricingLine;

#[function_component(UsageBasedPricing)]
pub fn usage_based_pricing() -> Html {
    html! {
        <section class="usage-pricing">
            <div class="usage-pricing-text">
                <h2>{"Usage Based Pricing"}</h2>
                <p>{"Get started for free, or select a plan that scales to your needs."}</p>
            </div>
            <div class="usage-pricing-widget">
                <PricingLine />
            </div>
            <style>
                {r#"
                .usage-pricing {
                    display: flex;
                    flex-direction: column;
                    padding-bottom: 2rem;
                }
                .usage-pricing-text {
                    width: 100%;
                }
                .usage-pricing-text h2 {
                    margin: 0 0 1rem;
                    padding: 0;
                    font-size: 40px;
                    font-weight: 200;
                    color: var(--text-primary);
                }
                .usage-pricing-text p {
                    margin: 0.5rem 0 0;
                    padding: 0;
                    font-size: 1.25rem;
                }
                .usage-pricing-widget {
                    width: 100%;
                }
                .usage-pricing-widget form {
                    background-color: var(--berry-white);
                    max-width: 455px;
                }
                .usage-pricing-widget button.ghost {
                    color: var(--text-primary);
                }
                @media (min-width: 768px) {
                    .usage-pricing {
                        padding-bottom: 6rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    async fn render_section() -> String {
        yew::ServerRenderer::<UsageBasedPricing>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_the_heading_and_intro_copy() {
        let rendered = render_section().await;
        assert!(rendered.contains("Usage Based Pricing"));
        assert!(rendered
            .contains("Get started for free, or select a plan that scales to your needs."));
    }

    #[tokio::test]
    async fn mounts_exactly_one_pricing_widget() {
        let rendered = render_section().await;
        assert_eq!(rendered.matches(r#"class="pricing-line""#).count(), 1);
    }
}
