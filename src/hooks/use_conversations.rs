use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, UseStateHandle, hook, use_effect_with, use_mut_ref, use_state};

use crate::api::CoachClient;
use crate::feed::{ConversationFeed, FeedSnapshot, FetchRequest, QueryKey};

type SharedFeed = Rc<RefCell<ConversationFeed>>;

/// Live view of the conversation feed plus the trigger for the next page.
#[derive(Clone, PartialEq)]
pub struct UseConversationsHandle {
    pub snapshot: FeedSnapshot,
    pub load_next: Callback<()>,
}

/// Paginated, searchable conversation data source.
///
/// Owns a [`ConversationFeed`] behind an `Rc<RefCell<_>>` so the in-flight
/// guard applies synchronously on each event, and re-renders through an
/// immutable snapshot. A changed `(user_id, page_size, search)` key restarts
/// pagination from offset zero; window focus triggers a silent refresh once
/// the freshness window has lapsed. `search` is raw input; callers debounce
/// it before passing it in.
#[hook]
pub fn use_conversations(
    user_id: String,
    page_size: i64,
    search: String,
) -> UseConversationsHandle {
    let key = QueryKey::new(user_id, page_size, &search);
    let feed: SharedFeed = use_mut_ref(|| ConversationFeed::new(key.clone()));
    let snapshot = use_state(|| feed.borrow().snapshot());

    // Restart pagination whenever the key changes; also issues the first
    // fetch on mount.
    {
        let feed = feed.clone();
        let snapshot = snapshot.clone();
        use_effect_with(key, move |key| {
            let request = {
                let mut state = feed.borrow_mut();
                if state.key() != key {
                    state.reset(key.clone());
                }
                state.begin_initial(Utc::now())
            };
            snapshot.set(feed.borrow().snapshot());
            if let Some(request) = request {
                spawn_fetch(feed, snapshot, request);
            }
            || ()
        });
    }

    // Refetch silently when the window regains focus after the freshness
    // window.
    {
        let feed = feed.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let request = feed.borrow_mut().begin_refresh(Utc::now());
                if let Some(request) = request {
                    snapshot.set(feed.borrow().snapshot());
                    spawn_fetch(feed.clone(), snapshot.clone(), request);
                }
            }));
            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window
                    .add_event_listener_with_callback("focus", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "focus",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let load_next = {
        let feed = feed.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |()| {
            let request = feed.borrow_mut().begin_load_next();
            if let Some(request) = request {
                snapshot.set(feed.borrow().snapshot());
                spawn_fetch(feed.clone(), snapshot.clone(), request);
            }
        })
    };

    UseConversationsHandle {
        snapshot: (*snapshot).clone(),
        load_next,
    }
}

fn spawn_fetch(feed: SharedFeed, snapshot: UseStateHandle<FeedSnapshot>, request: FetchRequest) {
    spawn_local(async move {
        let client = CoachClient::shared();
        let outcome = client.list_conversations(&request).await;
        {
            let mut state = feed.borrow_mut();
            match outcome {
                Ok(page) => {
                    state.apply_page(&request, page, Utc::now());
                }
                Err(error) => {
                    if state.apply_error(&request, &error) {
                        log::error!("conversation fetch failed: {error}");
                    }
                }
            }
        }
        snapshot.set(feed.borrow().snapshot());
    });
}
