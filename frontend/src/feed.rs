//! Insights posts: optional live feed with a built-in fallback list.

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("no feed endpoint configured")]
    Disabled,
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("feed answered with status {0}")]
    Status(u16),
    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("feed returned no posts")]
    Empty,
}

fn post(id: &str, title: &str, excerpt: &str, date: &str, likes: u32, comments: u32) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        url: config::LINKEDIN_URL.to_string(),
        engagement: Some(Engagement { likes, comments }),
    }
}

/// Shown until a live feed answers, and whenever it fails.
pub fn fallback_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Why Your Lean Initiatives Keep Failing",
            "Most manufacturing leaders think their operations problems are about processes. They're not. \
             After 20 years, here's what I've learned about why transformations stall...",
            "2026-01-15",
            127,
            23,
        ),
        post(
            "2",
            "The Hidden Cost of Executive Burnout",
            "We track every operational metric except the one that matters most: the biological systems \
             running our businesses. Here's why that's costing you millions...",
            "2026-01-10",
            89,
            15,
        ),
        post(
            "3",
            "80% of AI Projects Fail. Here's How to Be in the 20%",
            "AI isn't failing because of technology. It's failing because we're implementing it wrong. \
             The integration problem nobody talks about...",
            "2026-01-05",
            156,
            31,
        ),
    ]
}

pub fn parse_posts(body: &str) -> Result<Vec<Post>, FeedError> {
    let posts: Vec<Post> = serde_json::from_str(body)?;
    if posts.is_empty() {
        return Err(FeedError::Empty);
    }
    Ok(posts)
}

pub async fn fetch_posts(endpoint: Option<&str>) -> Result<Vec<Post>, FeedError> {
    let endpoint = endpoint.ok_or(FeedError::Disabled)?;
    let response = Request::get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_posts(&body)
}

/// Never fails: any feed error is logged and replaced by the fallback list.
pub fn posts_or_fallback(result: Result<Vec<Post>, FeedError>) -> Vec<Post> {
    match result {
        Ok(posts) => {
            log::info!("loaded {} insights posts from feed", posts.len());
            posts
        }
        Err(FeedError::Disabled) => {
            log::info!("insights feed not configured, using placeholder posts");
            fallback_posts()
        }
        Err(err) => {
            log::warn!("insights feed unavailable ({}), using placeholder posts", err);
            fallback_posts()
        }
    }
}

/// `2026-01-15` → `Jan 15, 2026`. Anything else is shown as given.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_dated_posts() {
        let posts = fallback_posts();
        assert_eq!(posts.len(), 3);
        let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2026-01-15", "2026-01-10", "2026-01-05"]);
        assert!(posts.iter().all(|p| p.url == config::LINKEDIN_URL));
        assert_eq!(posts[2].engagement, Some(Engagement { likes: 156, comments: 31 }));
    }

    #[test]
    fn parses_feed_with_and_without_engagement() {
        let body = r#"[
            {"id":"a","title":"T","excerpt":"E","date":"2026-02-01","url":"https://x.test/a",
             "engagement":{"likes":3,"comments":1}},
            {"id":"b","title":"U","excerpt":"F","date":"2026-02-02","url":"https://x.test/b"}
        ]"#;
        let posts = parse_posts(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].engagement, Some(Engagement { likes: 3, comments: 1 }));
        assert_eq!(posts[1].engagement, None);
    }

    #[test]
    fn empty_feed_is_an_error() {
        assert!(matches!(parse_posts("[]"), Err(FeedError::Empty)));
    }

    #[test]
    fn malformed_feed_is_a_decode_error() {
        assert!(matches!(parse_posts("{\"posts\":[]}"), Err(FeedError::Decode(_))));
        assert!(matches!(parse_posts("not json"), Err(FeedError::Decode(_))));
        assert!(matches!(parse_posts(r#"[{"id":"1"}]"#), Err(FeedError::Decode(_))));
    }

    #[test]
    fn failures_fall_back_to_placeholders() {
        assert_eq!(posts_or_fallback(Err(FeedError::Disabled)), fallback_posts());
        assert_eq!(posts_or_fallback(Err(FeedError::Status(502))), fallback_posts());
        assert_eq!(posts_or_fallback(Err(FeedError::Empty)), fallback_posts());
    }

    #[test]
    fn live_posts_pass_through() {
        let live = vec![post("9", "Live", "Body", "2026-03-01", 1, 0)];
        assert_eq!(posts_or_fallback(Ok(live.clone())), live);
    }

    #[test]
    fn dates_render_short_month() {
        assert_eq!(display_date("2026-01-15"), "Jan 15, 2026");
        assert_eq!(display_date("2026-01-05"), "Jan 5, 2026");
        assert_eq!(display_date("2025-12-31"), "Dec 31, 2025");
    }

    #[test]
    fn unparsable_dates_are_shown_verbatim() {
        assert_eq!(display_date("last week"), "last week");
        assert_eq!(display_date("2026-13-01"), "2026-13-01");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(FeedError::Status(404).to_string(), "feed answered with status 404");
        assert_eq!(FeedError::Empty.to_string(), "feed returned no posts");
    }
}
