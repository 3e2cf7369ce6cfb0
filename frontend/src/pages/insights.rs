use yew::prelude::*;

use crate::config;
use crate::feed::{display_date, fallback_posts, fetch_posts, posts_or_fallback, Post};
use crate::navigation::link_target;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: Post,
    delay: u32,
    visible: bool,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let (target, rel) = link_target(&post.url);

    html! {
        <a href={post.url.clone()} target={target} rel={rel}
            class={classes!("post-card", reveal_classes(props.visible, "reveal-up"))}
            style={delay_style(props.delay)}>
            <div class="post-date">{display_date(&post.date)}</div>
            <h3>{&post.title}</h3>
            <p class="post-excerpt">{&post.excerpt}</p>
            <div class="post-footer">
                if let Some(engagement) = &post.engagement {
                    <div class="post-engagement">
                        <span>{format!("{} likes", engagement.likes)}</span>
                        <span>{"•"}</span>
                        <span>{format!("{} comments", engagement.comments)}</span>
                    </div>
                }
                <span class="post-read-more">{"Read more ↗"}</span>
            </div>
        </a>
    }
}

#[function_component(Insights)]
pub fn insights() -> Html {
    let (section_ref, visible) = use_reveal(0.1);
    let posts = use_state(fallback_posts);
    let (target, rel) = link_target(config::LINKEDIN_URL);

    {
        let posts = posts.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_posts(config::insights_feed_url()).await;
                    posts.set(posts_or_fallback(result));
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} id="insights" class="section section-insights" aria-labelledby="insights-heading">
            <div class="container">
                <div class="insights-header">
                    <div>
                        <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"Latest Insights"}</span>
                        <h2 id="insights-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                            {"From My LinkedIn"}
                        </h2>
                    </div>
                    <a href={config::LINKEDIN_URL} target={target.clone()} rel={rel.clone()}
                        class={classes!("text-link", reveal_classes(visible, "reveal-fade"))} style={delay_style(200)}>
                        {"Follow on LinkedIn →"}
                    </a>
                </div>

                <div class="post-grid">
                    { for posts.iter().enumerate().map(|(index, post)| html! {
                        <PostCard key={post.id.clone()} post={post.clone()}
                            delay={index as u32 * 100} visible={visible} />
                    }) }
                </div>

                <div class={classes!("insights-cta", reveal_classes(visible, "reveal-up"))} style={delay_style(400)}>
                    <p class="muted">{"Get weekly insights on operations, leadership, and AI delivered to your feed."}</p>
                    <a href={config::LINKEDIN_URL} target={target} rel={rel} class="btn-secondary">
                        {"Connect on LinkedIn"}
                    </a>
                </div>
            </div>
        </section>
    }
}
