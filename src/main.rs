use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod quiz {
    pub mod answers;
    pub mod variant;
    pub mod validation;
    pub mod payload;
    pub mod delivery;
    pub mod wizard;
}
mod components {
    pub mod quiz;
}
mod pages {
    pub mod content;
    pub mod home;
    pub mod qualify;
}

use pages::{
    home::Home,
    qualify::QualifyPage,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/qualify")]
    Qualify,
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
        Route::Qualify => {
            info!("Rendering Qualify page");
            html! { <QualifyPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing Home page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
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
