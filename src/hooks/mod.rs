pub(crate) mod use_conversations;
pub(crate) mod use_debounced;
pub(crate) mod use_viewport;

pub use use_conversations::{UseConversationsHandle, use_conversations};
pub use use_debounced::use_debounced;
pub use use_viewport::use_is_mobile;

#[cfg(all(test, target_arch = "wasm32"))]
mod use_debounced_test;
