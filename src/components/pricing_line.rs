use yew::prelude::*;

use crate::config;

const VOLUME_TIERS: &[&str] = &[
    "Up to 10,000 notifications",
    "Up to 50,000 notifications",
    "Up to 250,000 notifications",
    "More than 250,000 notifications",
];

#[function_component(PricingLine)]
pub fn pricing_line() -> Html {
    html! {
        <form class="pricing-line" action={config::REGISTER_URL} method="get">
            <label for="volume">{"How many notifications will you send each month?"}</label>
            <select id="volume" name="volume">
                { for VOLUME_TIERS.iter().map(|tier| html! {
                    <option value={*tier}>{ *tier }</option>
                }) }
            </select>
            <p class="starting-price">{"Starts at $0/month"}</p>
            <button type="submit">{"Get Started"}</button>
            <button type="button" class="ghost">{"Talk to us"}</button>
            <style>
                {r#"
                .pricing-line {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 8px;
                }
                .pricing-line label {
                    font-size: 0.875rem;
                    color: var(--text-primary);
                }
                .pricing-line select {
                    padding: 0.5rem;
                    font-size: 0.875rem;
                }
                .pricing-line .starting-price {
                    margin: 0;
                    font-size: 1.25rem;
                    color: var(--text-primary);
                }
                .pricing-line button {
                    padding: 0.5rem 1.5rem;
                    font-size: 0.75rem;
                    border: 1px solid var(--berry);
                    border-radius: 9999px;
                    color: #ffffff;
                    background: var(--berry);
                    cursor: pointer;
                }
                .pricing-line button.ghost {
                    background: transparent;
                    border-color: transparent;
                }
                "#}
            </style>
        </form>
    }
}
