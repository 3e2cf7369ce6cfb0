use log::Level;

pub const SITE_OWNER: &str = "Sachin Chiplunkar";
pub const TAGLINE: &str = "Operations × Biology × AI";
pub const SITE_DOMAIN: &str = "sachinchiplunkar.com";

pub const BOOKING_URL: &str = "https://cal.com/sachin-chiplunkar-stuf7r/exploration";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sachinchiplunkar/";
pub const CONTACT_EMAIL: &str = "hello@sachinchiplunkar.com";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// Endpoint serving the insights post list, baked in at build time.
///
/// Unset means the live feed is not wired up and the section keeps showing
/// its built-in posts.
pub fn insights_feed_url() -> Option<&'static str> {
    option_env!("INSIGHTS_FEED_URL").filter(|url| !url.trim().is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_points_at_contact_address() {
        assert_eq!(mailto(), "mailto:hello@sachinchiplunkar.com");
    }

    #[test]
    fn outbound_urls_are_absolute() {
        for url in [BOOKING_URL, LINKEDIN_URL] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
