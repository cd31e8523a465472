use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Create a debounced callback that cancels any previous pending call
pub fn debounce_callback<T: 'static>(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    callback: Callback<T>,
    value: T,
    delay_ms: u32,
) {
    // Dropping the old Timeout cancels it
    timer_handle.set(None);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(delay_ms, move || {
        callback.emit(value);
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}

/// Text of the `<input>` an input event came from.
pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Value of the `<select>` a change event came from.
pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

pub fn checkbox_checked(e: &Event) -> bool {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.checked()
}

/// Callback that writes the input's text into a state handle.
pub fn bind_text(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| handle.set(input_value(&e)))
}

/// Smooth-scrolls the element with `id` into view, if it exists.
pub fn scroll_into_view(id: &str) {
    if let Some(el) = gloo_utils::document().get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Path of the current page.
pub fn current_path() -> String {
    gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}
