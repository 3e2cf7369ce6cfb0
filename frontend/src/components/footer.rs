use chrono::Datelike;
use yew::prelude::*;

use crate::components::nav::SECTION_LINKS;
use crate::config;
use crate::navigation::{anchor_click, link_target};

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_OWNER)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let mailto = config::mailto();
    let socials = [("LinkedIn", config::LINKEDIN_URL.to_string()), ("Email", mailto)];

    html! {
        <footer class="site-footer" role="contentinfo">
            <div class="footer-main">
                <div class="footer-brand">
                    <a href="#" class="nav-logo" onclick={anchor_click("#hero", None)}>
                        <span class="nav-logo-name">{config::SITE_OWNER}</span>
                        <span class="nav-logo-tagline">{config::TAGLINE}</span>
                    </a>
                    <p class="footer-blurb">
                        {"Bio-Operational Transformation Expert. Helping manufacturing executives \
                          achieve 10× performance by integrating operations, human health, and AI."}
                    </p>
                    <div class="footer-socials">
                        { for socials.into_iter().map(|(label, href)| {
                            let (target, rel) = link_target(&href);
                            html! {
                                <a key={label} href={href} target={target} rel={rel}
                                    class="social-link" aria-label={label}>{label}</a>
                            }
                        }) }
                    </div>
                </div>

                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for SECTION_LINKS.into_iter().map(|(label, href)| html! {
                            <li key={href}>
                                <a href={href} onclick={anchor_click(href, None)}>{label}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Get Started"}</h4>
                    <p class="footer-small">{"Ready to transform your operations?"}</p>
                    <a href="#assessment" class="footer-cta" onclick={anchor_click("#assessment", None)}>
                        {"Book Discovery Call ↗"}
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{copyright_line(current_year())}</p>
                <div class="footer-legal">
                    <a href="/privacy">{"Privacy Policy"}</a>
                    <a href="/terms">{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_owner_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 Sachin Chiplunkar. All rights reserved.");
    }
}
