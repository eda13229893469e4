use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="container mx-auto p-6 max-w-3xl">
            <h1 class="text-3xl font-bold mb-4">{"Dashboard"}</h1>
            <p class="text-base-content/80 mb-6">
                {"Welcome to PLC Coach! This is your dashboard."}
            </p>

            <div class="card bg-base-200 shadow mb-6">
                <div class="card-body">
                    <h2 class="card-title">{"Quick Stats"}</h2>
                    <p class="text-base-content/70">
                        {"Dashboard content will be implemented in future stories."}
                    </p>
                </div>
            </div>

            <Link<MainRoute> to={MainRoute::Chat} classes="btn btn-primary">
                <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-5 h-5" />
                {"Go to Chat"}
            </Link<MainRoute>>
        </div>
    }
}
