use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod behavior;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod inquiry;
pub mod links;
pub mod metadata;
pub mod pages {
    pub mod landing;
}
pub mod styles;
pub mod variant;

use pages::landing::Landing;
use variant::Variant;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/klassisch")]
    Classic,
    #[at("/atelier")]
    Atelier,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The landing page edition served at this route, if any.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Route::Home => Some(Variant::Signature),
            Route::Classic => Some(Variant::Classic),
            Route::Atelier => Some(Variant::Atelier),
            Route::NotFound => None,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes.variant() {
        Some(variant) => {
            info!("Rendering {:?} landing page", variant);
            html! { <Landing variant={variant} /> }
        }
        None => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_edition_has_its_own_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Classic.to_path(), "/klassisch");
        assert_eq!(Route::Atelier.to_path(), "/atelier");
    }

    #[test]
    fn paths_resolve_to_editions() {
        assert_eq!(Route::recognize("/klassisch").and_then(|r| r.variant()), Some(Variant::Classic));
        assert_eq!(Route::recognize("/atelier").and_then(|r| r.variant()), Some(Variant::Atelier));
        assert_eq!(Route::recognize("/").and_then(|r| r.variant()), Some(Variant::Signature));
    }

    #[test]
    fn not_found_has_no_edition() {
        assert_eq!(Route::NotFound.variant(), None);
    }
}
