use gloo_timers::callback::Timeout;
use yew::{hook, use_effect_with, use_mut_ref, use_state};

/// Debounce a rapidly-changing value: the returned value only catches up once
/// the input has been quiet for `delay_ms`. A change inside the window cancels
/// the pending timer, so a value typed and erased before the delay elapses
/// never settles.
#[hook]
pub fn use_debounced(value: String, delay_ms: u32) -> String {
    let settled = use_state(|| value.clone());
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let settled = settled.clone();
        use_effect_with(value, move |value| {
            if let Some(pending) = timer.borrow_mut().take() {
                pending.cancel();
            }
            if *settled != *value {
                let next = value.clone();
                let settled = settled.clone();
                let slot = timer.clone();
                *timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                    slot.borrow_mut().take();
                    settled.set(next);
                }));
            }
            move || {
                if let Some(pending) = timer.borrow_mut().take() {
                    pending.cancel();
                }
            }
        });
    }

    (*settled).clone()
}
