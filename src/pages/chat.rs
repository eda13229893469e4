use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::components::ConversationList;
use crate::models::app_state::AppState;

const SUGGESTIONS: [(&str, &str); 4] = [
    (
        "What makes an effective common formative assessment?",
        "Learn about assessment design",
    ),
    (
        "How do we establish productive team norms?",
        "Build collaborative culture",
    ),
    (
        "What is Response to Intervention (RTI)?",
        "Understand intervention systems",
    ),
    (
        "How do I implement project-based learning?",
        "Explore instructional strategies",
    ),
];

#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let active_conversation = use_state(|| None::<String>);

    let Some(user) = (*user).clone() else {
        return html! {
            <div class="flex items-center justify-center h-full p-12">
                <p class="text-base-content/70">{"Please log in to access chat."}</p>
            </div>
        };
    };

    let on_select = {
        let active_conversation = active_conversation.clone();
        Callback::from(move |id: String| active_conversation.set(Some(id)))
    };

    let on_new_conversation = {
        let active_conversation = active_conversation.clone();
        Callback::from(move |()| active_conversation.set(None))
    };

    html! {
        <div class="relative h-full">
            <ConversationList
                user_id={user.id.clone()}
                active_conversation_id={(*active_conversation).clone()}
                on_select={on_select}
                on_new_conversation={on_new_conversation}
            />

            <div class="flex flex-col h-full md:ml-80">
                <div class="flex-1 overflow-y-auto p-6">
                    <div class="max-w-2xl mx-auto text-center mt-12">
                        <Icon
                            icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight}
                            class="w-16 h-16 mx-auto text-primary mb-4"
                        />
                        <h1 class="text-2xl font-bold mb-2">{"Welcome to PLC Coach"}</h1>
                        <p class="text-base-content/70 mb-8">
                            {"Ask a question to get started, or pick one of these topics."}
                        </p>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-left">
                            {
                                SUGGESTIONS.iter().map(|(prompt, hint)| html! {
                                    <div class="card bg-base-200 shadow hover:bg-base-300 cursor-default">
                                        <div class="card-body p-4">
                                            <p class="font-medium">{ *prompt }</p>
                                            <p class="text-sm text-base-content/60">{ *hint }</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class="border-t border-base-300 p-4">
                    <div class="max-w-2xl mx-auto">
                        <div class="flex gap-2">
                            <input
                                type="text"
                                class="input input-bordered flex-1"
                                placeholder="Ask your PLC Coach a question..."
                                disabled=true
                            />
                            <button class="btn btn-primary" type="button" disabled=true>
                                {"Send"}
                            </button>
                        </div>
                        <p class="text-xs text-base-content/50 mt-2 text-center">
                            {"Messaging is not available yet."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
