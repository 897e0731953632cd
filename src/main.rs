use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod assets;
mod config;
mod links;
mod theme;

mod components {
    pub mod image;
    pub mod navigation;
    pub mod pricing;
    pub mod pricing_line;
}

mod pages {
    pub mod home;
}

use components::navigation::NavigationBar;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ theme::css_variables() }</style>
            <NavigationBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Surface panics in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_resolves_to_home() {
        assert!(matches!(Route::recognize("/"), Some(Route::Home)));
    }

    #[test]
    fn home_route_renders_at_root_path() {
        assert_eq!(Route::Home.to_path(), "/");
    }
}
