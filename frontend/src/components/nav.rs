use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::navigation::anchor_click;

/// In-page sections linked from the nav bar and footer.
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Method", "#method"),
    ("Process", "#process"),
    ("FAQ", "#faq"),
];

const SCROLLED_PAST_PX: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_PAST_PX
}

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            log::warn!("could not set body overflow: {:?}", err);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    use_effect_with_deps(
        |open: &bool| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let link = |label: &'static str, href: &'static str, class: &'static str, delay_ms: Option<u32>| {
        let style = delay_ms.map(|ms| format!("transition-delay: {}ms;", if *menu_open { ms } else { 0 }));
        html! {
            <li key={href} style={style}>
                <a href={href} class={class} onclick={anchor_click(href, Some(close_menu.clone()))}>{label}</a>
            </li>
        }
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}
                role="navigation" aria-label="Main navigation">
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={anchor_click("#hero", Some(close_menu.clone()))}>
                        <span class="nav-logo-name">{config::SITE_OWNER}</span>
                        <span class="nav-logo-tagline">{config::TAGLINE}</span>
                    </a>

                    <div class="nav-right">
                        <ul class="nav-links">
                            { for SECTION_LINKS.into_iter().map(|(label, href)| link(label, href, "nav-link", None)) }
                        </ul>
                        <a href="#assessment" class="nav-cta" onclick={anchor_click("#assessment", None)}>
                            {"Book Discovery Call"}
                        </a>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={menu_open.to_string()}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                <div class="mobile-menu-backdrop" onclick={close_menu.reform(|_: MouseEvent| ())}></div>
                <div class="mobile-menu-content">
                    <ul class="mobile-menu-links">
                        { for SECTION_LINKS.into_iter().enumerate().map(|(index, (label, href))| {
                            link(label, href, "mobile-menu-link", Some(index as u32 * 50))
                        }) }
                    </ul>
                    <a href="#assessment" class="nav-cta nav-cta-large"
                        style={format!("transition-delay: {}ms;", if *menu_open { 200 } else { 0 })}
                        onclick={anchor_click("#assessment", Some(close_menu.clone()))}>
                        {"Book Discovery Call"}
                    </a>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::anchor_id;

    #[test]
    fn scrolled_style_kicks_in_past_twenty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn section_links_are_in_page_anchors() {
        for (_, href) in SECTION_LINKS {
            assert!(anchor_id(href).is_some(), "{href}");
        }
    }
}
