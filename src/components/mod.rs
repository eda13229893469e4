pub(crate) mod conversation_item;
pub(crate) mod conversation_list;
pub(crate) mod loading;

// Re-export components for convenience
pub use conversation_item::ConversationItem;
pub use conversation_list::ConversationList;
pub use loading::Loading;

#[cfg(all(test, target_arch = "wasm32"))]
mod conversation_list_test;
