use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

use crate::format::format_timestamp;
use crate::models::conversation::Conversation;

#[derive(Properties, PartialEq)]
pub struct ConversationItemProps {
    pub conversation: Conversation,
    #[prop_or(false)]
    pub is_active: bool,
    /// Menu open/closed state lives in the parent list so at most one menu
    /// is open across all items.
    #[prop_or(false)]
    pub menu_open: bool,
    pub on_click: Callback<String>,
    pub on_toggle_menu: Callback<String>,
    pub on_close_menu: Callback<()>,
}

#[function_component(ConversationItem)]
pub fn conversation_item(props: &ConversationItemProps) -> Html {
    let conversation = &props.conversation;

    let on_click = {
        let on_click = props.on_click.clone();
        let id = conversation.id.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(id.clone()))
    };

    let on_menu_button = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        let id = conversation.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle_menu.emit(id.clone());
        })
    };

    let on_backdrop = {
        let on_close_menu = props.on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let menu_item = |label: &'static str, icon: IconId, danger: bool| -> Html {
        let on_close_menu = props.on_close_menu.clone();
        let id = conversation.id.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            // Placeholder until the action ships server-side.
            log::info!("{label} requested for conversation {id}; not available yet");
            on_close_menu.emit(());
        });
        let class = classes!(
            "w-full",
            "px-4",
            "py-2",
            "text-left",
            "text-sm",
            "flex",
            "items-center",
            "gap-2",
            if danger {
                "text-error hover:bg-error/10"
            } else {
                "hover:bg-base-200"
            },
        );
        html! {
            <button type="button" {class} {onclick}>
                <Icon icon_id={icon} class="w-4 h-4" />
                { label }
            </button>
        }
    };

    let row_class = classes!(
        "w-full",
        "p-4",
        "text-left",
        "border-b",
        "border-base-200",
        "transition-colors",
        if props.is_active {
            "bg-base-200 border-l-4 border-l-primary"
        } else {
            "hover:bg-base-200/50"
        },
    );

    html! {
        <div class="relative">
            <button type="button" class={row_class} onclick={on_click}>
                <h3 class="font-medium truncate mb-1">{ &conversation.title }</h3>
                <p class="text-sm text-base-content/70 truncate mb-2">{ conversation.preview() }</p>
                <div class="flex items-center justify-between text-xs text-base-content/50">
                    <span>{ format_timestamp(&conversation.updated_at) }</span>
                    <span>{ format!("{} messages", conversation.message_count) }</span>
                </div>
            </button>

            <button
                type="button"
                class="absolute top-2 right-2 btn btn-ghost btn-circle btn-sm"
                aria-label="Conversation actions"
                onclick={on_menu_button}
            >
                <Icon icon_id={IconId::HeroiconsOutlineEllipsisVertical} class="w-5 h-5" />
            </button>

            {
                if props.menu_open {
                    html! {
                        <>
                            // Backdrop so tapping anywhere else closes the menu.
                            <div class="fixed inset-0 z-10" onclick={on_backdrop} />
                            <div class="absolute right-2 top-12 z-20 bg-base-100 border border-base-300 rounded-box shadow-lg py-1 w-48">
                                { menu_item("Export", IconId::HeroiconsOutlineArrowDownTray, false) }
                                { menu_item("Share Link", IconId::HeroiconsOutlineShare, false) }
                                { menu_item("Archive", IconId::HeroiconsOutlineArchiveBox, false) }
                                <div class="divider my-0"></div>
                                { menu_item("Delete", IconId::HeroiconsOutlineTrash, true) }
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
