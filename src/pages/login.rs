use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-[60vh] p-6">
            <div class="card bg-base-200 shadow-xl w-full max-w-md">
                <div class="card-body items-center text-center">
                    <Icon
                        icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight}
                        class="w-12 h-12 text-primary mb-2"
                    />
                    <h1 class="card-title text-2xl">{"PLC Coach"}</h1>
                    <p class="text-base-content/70 mb-4">
                        {"Sign in to start a coaching conversation."}
                    </p>
                    <a class="btn btn-primary w-full" href="/api/auth/login">
                        {"Sign in with Clever"}
                    </a>
                </div>
            </div>
        </div>
    }
}
