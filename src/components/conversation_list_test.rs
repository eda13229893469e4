use chrono::{TimeZone, Utc};
use wasm_bindgen_test::*;
use yew::prelude::*;

use crate::components::conversation_item::{ConversationItem, ConversationItemProps};
use crate::components::conversation_list::{ConversationList, ConversationListProps};
use crate::models::conversation::Conversation;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_conversation() -> Conversation {
    Conversation {
        id: "conv-1".to_string(),
        title: "Team norms".to_string(),
        first_message_preview: "How do we establish productive team norms?".to_string(),
        updated_at: Utc.with_ymd_and_hms(2025, 11, 7, 10, 0, 0).unwrap(),
        message_count: 4,
    }
}

fn item_props(menu_open: bool) -> ConversationItemProps {
    yew::props!(ConversationItemProps {
        conversation: sample_conversation(),
        menu_open,
        on_click: Callback::from(|_: String| ()),
        on_toggle_menu: Callback::from(|_: String| ()),
        on_close_menu: Callback::from(|()| ()),
    })
}

#[wasm_bindgen_test]
async fn item_renders_title_preview_and_count() {
    let rendered = yew::LocalServerRenderer::<ConversationItem>::with_props(item_props(false))
        .render()
        .await;

    assert!(rendered.contains("Team norms"));
    assert!(rendered.contains("How do we establish productive team norms?"));
    assert!(rendered.contains("4 messages"));
    assert!(rendered.contains("Conversation actions"));
    // Menu closed: no action entries in the tree.
    assert!(!rendered.contains("Archive"));
}

#[wasm_bindgen_test]
async fn item_with_open_menu_lists_placeholder_actions() {
    let rendered = yew::LocalServerRenderer::<ConversationItem>::with_props(item_props(true))
        .render()
        .await;

    assert!(rendered.contains("Export"));
    assert!(rendered.contains("Share Link"));
    assert!(rendered.contains("Archive"));
    assert!(rendered.contains("Delete"));
}

#[wasm_bindgen_test]
async fn list_renders_search_box_and_initial_loading_state() {
    let props = yew::props!(ConversationListProps {
        user_id: "user-1".to_string(),
        on_select: Callback::from(|_: String| ()),
    });
    let rendered = yew::LocalServerRenderer::<ConversationList>::with_props(props)
        .render()
        .await;

    assert!(rendered.contains("Search conversations..."));
    assert!(rendered.contains("New Conversation"));
    assert!(rendered.contains("Loading conversations..."));
}
