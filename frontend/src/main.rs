use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod forms {
    pub mod step;
    pub mod flows;
    pub mod validation;
    pub mod session;
    pub mod submission;
    pub mod lifecycle;
}
mod components {
    pub mod form_modal;
    pub mod modal_trigger;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod venture_building;
}

use pages::{
    home::Home,
    services::Services,
    venture_building::VentureBuilding,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/venture-building")]
    VentureBuilding,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::VentureBuilding => {
            info!("Rendering Venture Building page");
            html! { <VentureBuilding /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"tenacity"}
                </Link<Route>>
                <Link<Route> to={Route::Services} classes="nav-link">
                    {"Services"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
