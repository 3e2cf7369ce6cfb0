use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

/// Element id targeted by an in-page link, `None` for anything else.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_id(href) else { return };
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no section with id {}", id),
    }
}

pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).left(0.0);
        if smooth {
            options.behavior(ScrollBehavior::Smooth);
        }
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Click handler for an in-page link: suppresses the jump, smooth-scrolls to
/// the target and then runs `after` (e.g. closing the mobile menu). Links
/// that are not anchors are left to the browser.
pub fn anchor_click(href: &'static str, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if anchor_id(href).is_none() {
            return;
        }
        e.prevent_default();
        if let Some(after) = &after {
            after.emit(());
        }
        scroll_to_anchor(href);
    })
}

/// Absolute http(s) links leave the site and open in a new browsing context.
pub fn is_external(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

/// `target` / `rel` attribute values for a link.
pub fn link_target(href: &str) -> (Option<AttrValue>, Option<AttrValue>) {
    if is_external(href) {
        (Some(AttrValue::Static("_blank")), Some(AttrValue::Static("noopener noreferrer")))
    } else {
        (None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids_are_stripped() {
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("#assessment"), Some("assessment"));
    }

    #[test]
    fn non_anchor_links_have_no_id() {
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/privacy"), None);
        assert_eq!(anchor_id("mailto:hello@sachinchiplunkar.com"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn only_web_links_open_elsewhere() {
        assert!(is_external("https://cal.com/sachin-chiplunkar-stuf7r/exploration"));
        assert!(!is_external("mailto:hello@sachinchiplunkar.com"));
        assert!(!is_external("/terms"));
        assert!(!is_external("#faq"));
    }

    #[test]
    fn external_links_get_safe_rel() {
        let (target, rel) = link_target("https://www.linkedin.com/in/sachinchiplunkar/");
        assert_eq!(target.as_deref(), Some("_blank"));
        assert_eq!(rel.as_deref(), Some("noopener noreferrer"));
        assert_eq!(link_target("mailto:x@y.z"), (None, None));
    }
}
