use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] p-6 text-center">
            <h1 class="text-5xl font-bold mb-2">{"404"}</h1>
            <p class="text-base-content/70 mb-6">{"This page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                {"Back to Dashboard"}
            </Link<MainRoute>>
        </div>
    }
}
