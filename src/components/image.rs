use yew::prelude::*;

use crate::assets::Asset;

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    pub asset: Asset,
    pub alt: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Image)]
pub fn image(props: &ImageProps) -> Html {
    let style = format!(
        "max-width: {}px; width: 100%; height: auto;",
        props.asset.width()
    );
    html! {
        <img
            src={props.asset.url()}
            alt={props.alt}
            class={props.class.clone()}
            style={style}
        />
    }
}
