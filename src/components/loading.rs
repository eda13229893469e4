use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-screen">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6 text-primary" />
                    <span>{"PLC Coach"}</span>
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <span>{"Loading"}</span>
                    <span class="loading loading-dots loading-sm"></span>
                </div>
            </div>
        </div>
    }
}
