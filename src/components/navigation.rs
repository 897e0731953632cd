use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::assets;
use crate::components::image::Image;
use crate::links::{NavEntry, NavPlacement, NavTarget, NAV_ENTRIES};
use crate::Route;

fn render_nav_link(entry: &NavEntry, classes: Classes) -> Html {
    match &entry.target {
        NavTarget::Page(route) => html! {
            <Link<Route> to={route.clone()} classes={classes}>{ entry.label }</Link<Route>>
        },
        NavTarget::Section(path) => html! {
            <a href={*path} class={classes}>{ entry.label }</a>
        },
        NavTarget::External(url) => html! {
            <a href={*url} class={classes} target="_blank" rel="noopener noreferrer">
                { entry.label }
            </a>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    /// Fired for any click inside the overlay, links included.
    pub on_overlay_click: Callback<MouseEvent>,
    /// Fired by the explicit close control.
    pub on_close: Callback<MouseEvent>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <ul class="mobile-menu" onclick={props.on_overlay_click.clone()}>
            <li class="close">
                <a href="/" onclick={props.on_close.clone()}>{"close X"}</a>
            </li>
            { for NAV_ENTRIES.iter().map(|entry| html! {
                <li>{ render_nav_link(entry, Classes::new()) }</li>
            }) }
            <style>
                {r#"
                .mobile-menu {
                    position: fixed;
                    top: 0;
                    left: 0;
                    margin: 0;
                    padding: 0;
                    width: 100%;
                    height: 100%;
                    list-style: none;
                    z-index: 99;
                    background-color: var(--berry);
                }
                .mobile-menu li {
                    padding: 2rem 2rem 0;
                    font-size: 1.5rem;
                }
                .mobile-menu li a {
                    color: #ffffff;
                    text-decoration: none;
                }
                .mobile-menu li.close {
                    position: relative;
                    top: -8px;
                    left: 7px;
                    text-align: right;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </ul>
    }
}

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Overlay-wide click handler. Must not suppress defaults, or links
    // inside the menu would stop navigating.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // The close control sits on a plain anchor, so it suppresses the
    // default navigation and then closes outright instead of toggling.
    let dismiss_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let mut link_items: Vec<Html> = vec![html! {
        <li class="logo">
            <Link<Route> to={Route::Home}>
                <Image asset={assets::LOGO} alt="Herald" />
            </Link<Route>>
        </li>
    }];
    let mut ruled = false;
    for entry in NAV_ENTRIES.iter().filter(|e| e.placement == NavPlacement::Link) {
        if entry.is_external() && !ruled {
            ruled = true;
            link_items.push(html! { <li><div class="nav-rule"></div></li> });
        }
        link_items.push(html! { <li>{ render_nav_link(entry, Classes::new()) }</li> });
    }

    let mut action_items: Vec<Html> = Vec::new();
    for entry in NAV_ENTRIES.iter() {
        if let NavPlacement::Action { primary } = entry.placement {
            let classes = if primary {
                classes!("action-button", "primary")
            } else {
                classes!("action-button")
            };
            action_items.push(html! {
                <li class={classes!(primary.then_some("sign-up"))}>
                    { render_nav_link(entry, classes) }
                </li>
            });
        }
    }

    html! {
        <>
            <section class="nav-container">
                <nav>
                    <ul class="nav-links">{ for link_items }</ul>
                    <ul class="account-buttons">
                        { for action_items }
                        <li class="hamburger">
                            <a href="/" onclick={toggle_menu}>
                                <Image asset={assets::HAMBURGER} alt="Open menu" />
                            </a>
                        </li>
                    </ul>
                </nav>
                <style>
                    {r#"
                    .nav-container {
                        position: -webkit-sticky;
                        position: sticky;
                        top: 0;
                        z-index: 98;
                        background: #ffffff;
                    }
                    .nav-container nav {
                        display: flex;
                        justify-content: space-between;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 1rem 0;
                    }
                    .nav-links {
                        margin: 0;
                        padding: 0;
                    }
                    .nav-links li {
                        list-style: none;
                        display: none;
                        margin-right: 1rem;
                        vertical-align: top;
                        height: 30px;
                    }
                    .nav-links li a {
                        text-decoration: none;
                        font-size: 0.75rem;
                        line-height: 30px;
                        color: var(--berry);
                    }
                    .nav-links li.logo {
                        display: inline-block;
                        width: 110px;
                        height: 30px;
                        padding-left: 1rem;
                    }
                    .nav-rule {
                        height: 20px;
                        margin-top: 5px;
                        border-right: 2px solid var(--rule-gray);
                    }
                    .account-buttons {
                        margin: 0 1rem 0 0;
                        padding: 0;
                    }
                    .account-buttons li {
                        list-style: none;
                        display: none;
                        margin-left: 0.75rem;
                        vertical-align: top;
                        height: 30px;
                    }
                    .account-buttons li.sign-up {
                        display: inline-block;
                    }
                    .account-buttons li.hamburger {
                        display: inline-block;
                        width: 30px;
                        height: 30px;
                        cursor: pointer;
                    }
                    .action-button {
                        text-decoration: none;
                        font-size: 0.75rem;
                        line-height: 30px;
                        padding: 0.5rem 1.5rem;
                        border: 1px solid var(--berry);
                        border-radius: 9999px;
                        color: var(--berry);
                        background: #ffffff;
                    }
                    .action-button.primary {
                        color: #ffffff;
                        background: var(--berry);
                    }
                    @media (min-width: 768px) {
                        .nav-links li,
                        .account-buttons li {
                            display: inline-block;
                        }
                        .account-buttons li.hamburger {
                            display: none;
                        }
                    }
                    @media (min-width: 1024px) {
                        .nav-container nav {
                            margin-top: 2rem;
                        }
                        .nav-links li {
                            margin-right: 2rem;
                        }
                        .nav-links li.logo {
                            padding-left: 0;
                        }
                        .account-buttons {
                            margin-right: 0;
                        }
                    }
                    "#}
                </style>
            </section>
            {
                if *menu_open {
                    html! {
                        <MobileMenu
                            on_overlay_click={close_menu}
                            on_close={dismiss_menu}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;

    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::router::Router;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(Testbed)]
    fn testbed() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <NavigationBar />
            </Router>
        }
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(50)).await;
    }

    async fn mount() {
        let body = document().body().unwrap();
        body.set_inner_html("");
        let host = document().create_element("div").unwrap();
        body.append_child(&host).unwrap();
        yew::Renderer::<Testbed>::with_root(host).render();
        settle().await;
    }

    fn click(selector: &str) {
        let element = document()
            .query_selector(selector)
            .unwrap()
            .expect("selector should match");
        element.dyn_into::<HtmlElement>().unwrap().click();
    }

    fn overlay_present() -> bool {
        document().query_selector("ul.mobile-menu").unwrap().is_some()
    }

    #[wasm_bindgen_test]
    async fn menu_starts_closed() {
        mount().await;
        assert!(!overlay_present());
    }

    #[wasm_bindgen_test]
    async fn hamburger_opens_the_overlay_with_every_destination() {
        mount().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        assert!(overlay_present());

        // close control plus the six destinations
        let anchors = document()
            .query_selector_all("ul.mobile-menu li a")
            .unwrap();
        assert_eq!(anchors.length(), 7);

        let overlay = document().query_selector("ul.mobile-menu").unwrap().unwrap();
        let text = overlay.text_content().unwrap();
        for label in ["Home", "Pricing", "Company", "Documentation", "Login", "Sign Up"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[wasm_bindgen_test]
    async fn hamburger_twice_returns_to_closed() {
        mount().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        assert!(!overlay_present());
    }

    #[wasm_bindgen_test]
    async fn close_control_closes_the_overlay() {
        mount().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        click("ul.mobile-menu li.close a");
        settle().await;
        assert!(!overlay_present());
    }

    #[wasm_bindgen_test]
    async fn selecting_a_destination_closes_the_overlay() {
        mount().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        // second row is the Home entry, a router link
        click("ul.mobile-menu li:nth-child(2) a");
        settle().await;
        assert!(!overlay_present());
    }

    #[wasm_bindgen_test]
    async fn clicking_the_overlay_background_closes_it() {
        mount().await;
        click(".account-buttons li.hamburger a");
        settle().await;
        click("ul.mobile-menu");
        settle().await;
        assert!(!overlay_present());
    }

    #[wasm_bindgen_test]
    async fn hamburger_never_navigates() {
        mount().await;
        let location = web_sys::window().unwrap().location();
        let before = location.pathname().unwrap();
        click(".account-buttons li.hamburger a");
        settle().await;
        assert!(overlay_present());
        assert_eq!(location.pathname().unwrap(), before);
    }
}
