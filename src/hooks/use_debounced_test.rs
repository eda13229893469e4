use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::hooks::use_debounced;

wasm_bindgen_test_configure!(run_in_browser);

const QUIET_MS: u32 = 80;

#[derive(Properties, PartialEq)]
struct SearchInputProps {
    on_settle: Callback<String>,
}

/// Minimal input component: buttons drive the raw value, the settled value is
/// rendered and reported through `on_settle` every time it changes.
#[function_component(SearchInput)]
fn search_input(props: &SearchInputProps) -> Html {
    let raw = use_state(String::new);
    let settled = use_debounced((*raw).clone(), QUIET_MS);

    {
        let on_settle = props.on_settle.clone();
        use_effect_with(settled.clone(), move |settled| {
            on_settle.emit(settled.clone());
            || ()
        });
    }

    let set_value = |value: &'static str| {
        let raw = raw.clone();
        Callback::from(move |_: MouseEvent| raw.set(value.to_string()))
    };

    html! {
        <div>
            <button id="type-term" onclick={set_value("assessment")}>{"type"}</button>
            <button id="erase-term" onclick={set_value("")}>{"erase"}</button>
            <span id="settled-term">{ settled }</span>
        </div>
    }
}

fn mount(on_settle: Callback<String>) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<SearchInput>::with_root_and_props(
        root.clone(),
        yew::props!(SearchInputProps { on_settle }),
    )
    .render();
    root
}

fn click(id: &str) {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
}

fn settled_text() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("settled-term")
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, Callback<String>) {
    let history = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let history = history.clone();
        Callback::from(move |value: String| history.borrow_mut().push(value))
    };
    (history, callback)
}

#[wasm_bindgen_test]
async fn term_erased_inside_the_window_never_settles() {
    let (history, on_settle) = recorder();
    let root = mount(on_settle);
    TimeoutFuture::new(10).await;

    click("type-term");
    // Erase well inside the quiet period, then wait long past it.
    TimeoutFuture::new(QUIET_MS / 4).await;
    click("erase-term");
    TimeoutFuture::new(QUIET_MS * 3).await;

    assert!(
        !history.borrow().iter().any(|value| value == "assessment"),
        "erased term must never settle: {:?}",
        history.borrow()
    );
    assert_eq!(settled_text(), "");
    root.remove();
}

#[wasm_bindgen_test]
async fn term_left_alone_settles_after_the_quiet_period() {
    let (history, on_settle) = recorder();
    let root = mount(on_settle);
    TimeoutFuture::new(10).await;

    click("type-term");
    TimeoutFuture::new(QUIET_MS / 4).await;
    assert_eq!(settled_text(), "");

    TimeoutFuture::new(QUIET_MS * 3).await;
    assert_eq!(settled_text(), "assessment");
    assert_eq!(
        history.borrow().last().map(String::as_str),
        Some("assessment")
    );
    root.remove();
}
