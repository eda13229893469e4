use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry};
use yew::{
    Callback, Html, MouseEvent, Properties, TargetCast, classes, function_component, html,
    use_effect_with, use_node_ref, use_state,
};
use yew_icons::{Icon, IconId};

use crate::components::conversation_item::ConversationItem;
use crate::feed::DEFAULT_PAGE_SIZE;
use crate::hooks::{use_conversations, use_debounced, use_is_mobile};

/// Below this width the sidebar renders as an overlay drawer.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before typed search input drives a fetch.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct ConversationListProps {
    pub user_id: String,
    #[prop_or_default]
    pub active_conversation_id: Option<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub on_new_conversation: Callback<()>,
}

/// Conversation sidebar: searchable, infinitely scrolled, and an overlay
/// drawer on narrow viewports.
#[function_component(ConversationList)]
pub fn conversation_list(props: &ConversationListProps) -> Html {
    let sidebar_open = use_state(|| false);
    let search_input = use_state(String::new);
    let open_menu = use_state(|| None::<String>);

    // Re-evaluated on every viewport resize; loaded pages are unaffected.
    let is_mobile = use_is_mobile(MOBILE_BREAKPOINT_PX);

    let settled_search = use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);
    let handle = use_conversations(
        props.user_id.clone(),
        DEFAULT_PAGE_SIZE,
        settled_search.clone(),
    );
    let feed = handle.snapshot.clone();

    // Infinite scroll: observe the sentinel below the list. The observer is
    // re-armed whenever paging state changes, so re-intersecting after a
    // completed fetch triggers the next page (level-sensitive, not
    // edge-sensitive).
    let sentinel = use_node_ref();
    {
        let load_next = handle.load_next.clone();
        use_effect_with(
            (sentinel.clone(), feed.has_more, feed.is_fetching_more),
            move |(sentinel, has_more, is_fetching_more)| {
                let mut observing = None;
                if *has_more
                    && !*is_fetching_more
                    && let Some(target) = sentinel.cast::<Element>()
                {
                    let callback = Closure::<dyn FnMut(js_sys::Array)>::wrap(Box::new(
                        move |entries: js_sys::Array| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if intersecting {
                                load_next.emit(());
                            }
                        },
                    ));
                    if let Ok(observer) =
                        IntersectionObserver::new(callback.as_ref().unchecked_ref())
                    {
                        observer.observe(&target);
                        observing = Some((observer, callback));
                    }
                }
                move || {
                    if let Some((observer, _callback)) = observing {
                        observer.disconnect();
                    }
                }
            },
        );
    }

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            search_input.set(target.value());
        })
    };

    let on_clear_search = {
        let search_input = search_input.clone();
        Callback::from(move |_: MouseEvent| search_input.set(String::new()))
    };

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let on_close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };

    let on_select_conversation = {
        let on_select = props.on_select.clone();
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |id: String| {
            on_select.emit(id);
            if is_mobile {
                sidebar_open.set(false);
            }
        })
    };

    let on_new_conversation = {
        let on_new_conversation = props.on_new_conversation.clone();
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| {
            on_new_conversation.emit(());
            if is_mobile {
                sidebar_open.set(false);
            }
        })
    };

    let on_toggle_menu = {
        let open_menu = open_menu.clone();
        Callback::from(move |id: String| {
            if (*open_menu).as_deref() == Some(id.as_str()) {
                open_menu.set(None);
            } else {
                open_menu.set(Some(id));
            }
        })
    };

    let on_close_menu = {
        let open_menu = open_menu.clone();
        Callback::from(move |()| open_menu.set(None))
    };

    let search_active = !settled_search.trim().is_empty();

    let aside_class = classes!(
        "fixed",
        "top-0",
        "left-0",
        "h-full",
        "z-40",
        "flex",
        "flex-col",
        "bg-base-100",
        "border-r",
        "border-base-300",
        "transition-transform",
        if is_mobile { "w-full" } else { "w-80" },
        if is_mobile && !*sidebar_open {
            "-translate-x-full"
        } else {
            "translate-x-0"
        },
    );

    let empty_state = if !feed.is_loading && feed.error.is_none() && feed.conversations.is_empty() {
        if search_active {
            html! {
                <div class="p-4 text-center text-base-content/60">
                    <p>{ format!("No conversations found for \"{}\"", settled_search.trim()) }</p>
                    <button
                        class="btn btn-link btn-sm mt-2"
                        type="button"
                        onclick={on_clear_search.clone()}
                    >
                        {"Clear search"}
                    </button>
                </div>
            }
        } else {
            html! {
                <div class="p-4 text-center text-base-content/60">{"No conversations yet"}</div>
            }
        }
    } else {
        html! {}
    };

    html! {
        <>
            {
                if is_mobile {
                    html! {
                        <button
                            type="button"
                            class="fixed top-4 left-4 z-50 btn btn-ghost btn-circle shadow-md"
                            aria-label="Toggle conversation list"
                            onclick={on_toggle_sidebar}
                        >
                            {
                                if *sidebar_open {
                                    html! { <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" /> }
                                } else {
                                    html! { <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" /> }
                                }
                            }
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            {
                if is_mobile && *sidebar_open {
                    html! {
                        <div
                            class="fixed inset-0 bg-black/50 z-30"
                            onclick={on_close_sidebar}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <aside class={aside_class} aria-label="Conversation list">
                <div class="p-4 border-b border-base-300 space-y-3">
                    <button
                        class="btn btn-primary w-full"
                        type="button"
                        onclick={on_new_conversation}
                    >
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                        {"New Conversation"}
                    </button>

                    <div class="relative">
                        <input
                            type="text"
                            class="input input-bordered w-full pl-10"
                            placeholder="Search conversations..."
                            value={(*search_input).clone()}
                            oninput={on_search_input}
                            aria-label="Search conversations"
                        />
                        <Icon
                            icon_id={IconId::HeroiconsOutlineMagnifyingGlass}
                            class="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-base-content/50"
                        />
                        {
                            if !search_input.is_empty() {
                                html! {
                                    <button
                                        type="button"
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-base-content/50 hover:text-base-content"
                                        aria-label="Clear search"
                                        onclick={on_clear_search}
                                    >
                                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                                    </button>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto">
                    {
                        if feed.is_loading {
                            html! {
                                <div class="p-4 text-center text-base-content/60">
                                    {"Loading conversations..."}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    {
                        if feed.error.is_some() {
                            html! {
                                <div class="p-4 text-center text-error">
                                    {"Failed to load conversations"}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    { empty_state }

                    { for feed.conversations.iter().map(|conversation| {
                        let id = conversation.id.clone();
                        let is_active = props.active_conversation_id.as_deref() == Some(id.as_str());
                        let menu_open = (*open_menu).as_deref() == Some(id.as_str());
                        html! {
                            <ConversationItem
                                key={id}
                                conversation={conversation.clone()}
                                {is_active}
                                {menu_open}
                                on_click={on_select_conversation.clone()}
                                on_toggle_menu={on_toggle_menu.clone()}
                                on_close_menu={on_close_menu.clone()}
                            />
                        }
                    })}

                    {
                        if feed.has_more {
                            html! {
                                <div ref={sentinel.clone()} class="p-4 text-center">
                                    {
                                        if feed.is_fetching_more {
                                            html! {
                                                <div class="text-base-content/60">{"Loading more..."}</div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </aside>
        </>
    }
}
