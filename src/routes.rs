use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = (*user).is_some();
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Home | MainRoute::Dashboard => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout on_logout={Some(on_logout)}>
                    <DashboardPage />
                </Layout>
            }
        }
        MainRoute::Chat => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout on_logout={Some(on_logout)}>
                    <ChatPage />
                </Layout>
            }
        }
        MainRoute::NotFound => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout on_logout={Some(on_logout)}>
                    <ErrorPage />
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::MainRoute;

    #[test]
    fn routes_render_expected_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::Chat.to_path(), "/chat");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn paths_recognize_back_to_routes() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(MainRoute::recognize("/chat"), Some(MainRoute::Chat));
        assert_eq!(
            MainRoute::recognize("/no-such-page"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn routes_are_cloneable_and_comparable() {
        let route = MainRoute::Chat;
        assert_eq!(route.clone(), MainRoute::Chat);
        assert_ne!(route, MainRoute::Dashboard);
    }
}
