use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::{hook, use_effect_with, use_state};

// Treated as docked-panel width when the viewport cannot be read.
const FALLBACK_WIDTH_PX: f64 = 1024.0;

/// Whether the viewport is narrower than `breakpoint_px`, re-evaluated on
/// every window resize.
#[hook]
pub fn use_is_mobile(breakpoint_px: f64) -> bool {
    let width = use_state(current_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                width.set(current_width());
            }));
            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *width < breakpoint_px
}

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_WIDTH_PX)
}
