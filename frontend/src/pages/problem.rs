use yew::prelude::*;

use crate::visibility::{delay_style, reveal_classes, use_reveal};

struct Stat {
    stat: &'static str,
    label: &'static str,
    citation: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        stat: "80-95%",
        label: "of AI initiatives fail to deliver ROI",
        citation: "MIT Sloan Management Review, 2024",
    },
    Stat {
        stat: "70%",
        label: "of leaders report unprecedented burnout",
        citation: "Deloitte Executive Survey, 2024",
    },
    Stat {
        stat: "60%",
        label: "of lean initiatives fail to sustain results",
        citation: "McKinsey Operations Report, 2023",
    },
];

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stat: &'static str,
    label: &'static str,
    citation: &'static str,
    delay: u32,
}

// Each card watches itself so they pop in as they scroll by on mobile.
#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let (card_ref, visible) = use_reveal(0.2);

    html! {
        <div ref={card_ref} class={classes!("glass-panel", "stat-card", reveal_classes(visible, "reveal-up"))}
            style={delay_style(props.delay)}>
            <div class="stat-value">{props.stat}</div>
            <div class="stat-label">{props.label}</div>
            <div class="stat-citation">{props.citation}</div>
        </div>
    }
}

#[function_component(Problem)]
pub fn problem() -> Html {
    let (heading_ref, visible) = use_reveal(0.2);

    html! {
        <section id="problem" class="section section-problem" aria-labelledby="problem-heading">
            <div class="container">
                <div ref={heading_ref} class={classes!("section-header", reveal_classes(visible, "reveal-up"))}>
                    <span class="eyebrow eyebrow-alert">{"⚠ The Real Problem"}</span>
                    <h2 id="problem-heading">
                        {"Your Transformations Keep Failing. "}
                        <span class="muted">{"Here's Why."}</span>
                    </h2>
                    <p class="lead">
                        {"It's not because of bad strategy. It's because you're treating "}
                        <strong>{"three connected problems"}</strong>
                        {" as separate issues. Operations, human performance, and technology are one \
                          integrated system. Fix them together or watch your initiatives stall again."}
                    </p>
                </div>

                <div class="stat-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <StatCard key={stat.label} stat={stat.stat} label={stat.label}
                            citation={stat.citation} delay={index as u32 * 150} />
                    }) }
                </div>

                <div class={classes!("callout", reveal_classes(visible, "reveal-up"))} style={delay_style(500)}>
                    <p>
                        <span class="text-white">{"The pattern is clear: "}</span>
                        {"Consultants address operations OR health OR AI. None address all three simultaneously. "}
                        <span class="text-primary">{"That's exactly why transformations don't stick."}</span>
                    </p>
                </div>
            </div>
        </section>
    }
}
