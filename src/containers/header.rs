use reqwest::StatusCode;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::api::CoachClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();
    let mobile_menu_open = use_state(|| false);

    let on_toggle_mobile = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let on_close_mobile = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            let on_logout = on_logout.clone();
            spawn_local(async move {
                let client = CoachClient::shared();
                if let Err(error) = client.logout().await
                    && error.status() != Some(StatusCode::UNAUTHORIZED)
                {
                    log::error!("logout failed: {error}");
                }
                if let Some(callback) = on_logout {
                    callback.emit(());
                }
            });
        })
    };

    let nav_links = html! {
        <>
            <li>
                <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost">
                    {"Dashboard"}
                </Link<MainRoute>>
            </li>
            <li>
                <Link<MainRoute> to={MainRoute::Chat} classes="btn btn-ghost">
                    {"Chat"}
                </Link<MainRoute>>
            </li>
        </>
    };

    let user_section = user_opt.as_ref().map_or_else(
        || {
            html! {
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                    {"Login"}
                </Link<MainRoute>>
            }
        },
        |user| {
            html! {
                <div class="flex items-center gap-3">
                    <span class="text-sm text-base-content/80">{ user.display_name() }</span>
                    <button class="btn btn-primary btn-sm" type="button" onclick={on_logout_click.clone()}>
                        {"Logout"}
                    </button>
                </div>
            }
        },
    );

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="text-lg font-bold">
                    {"PLC Coach"}
                </Link<MainRoute>>
            </a>

            <ul class="hidden menu sm:menu-horizontal">
                { nav_links.clone() }
            </ul>

            <div class="hidden sm:flex">
                { user_section.clone() }
            </div>

            <div class="sm:hidden">
                <button
                    class="btn btn-ghost btn-circle"
                    type="button"
                    aria-label="Open main menu"
                    onclick={on_toggle_mobile}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                </button>
                {
                    if *mobile_menu_open {
                        html! {
                            <ul
                                class="menu absolute right-2 top-16 z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-2"
                                onclick={on_close_mobile}
                            >
                                { nav_links }
                                <li class="mt-2 border-t border-base-300 pt-2">{ user_section }</li>
                            </ul>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}
