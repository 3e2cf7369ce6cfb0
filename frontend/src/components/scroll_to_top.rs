use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::scroll_to_top;

const SHOW_AFTER_PX: f64 = 500.0;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top(true));

    html! {
        <button
            class={classes!("scroll-to-top", should_show(scroll_y).then(|| "is-visible"))}
            aria-label="Scroll to top"
            onclick={onclick}
        >
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(500.0));
        assert!(should_show(501.0));
    }
}
