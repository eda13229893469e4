use reqwest::StatusCode;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::CoachClient;
use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_with_logout};

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let bootstrapped = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        let bootstrapped = bootstrapped.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = CoachClient::shared();
                match client.get_profile().await {
                    Ok(response) => dispatch.set(AppState {
                        user: Some(response.user),
                    }),
                    Err(error) => {
                        if error.status() != Some(StatusCode::UNAUTHORIZED) {
                            log::error!("failed to load profile: {error}");
                        }
                        dispatch.set(AppState::default());
                    }
                }
                bootstrapped.set(true);
            });
            || ()
        });
    }

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.set(AppState::default()))
    };

    if !*bootstrapped {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| {
                switch_with_logout(route, on_logout.clone())
            }} />
        </BrowserRouter>
    }
}
