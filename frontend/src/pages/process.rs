use yew::prelude::*;

use crate::navigation::anchor_click;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

struct Phase {
    phase: &'static str,
    title: &'static str,
    duration: &'static str,
    description: &'static str,
    deliverables: [&'static str; 4],
}

const PHASES: [Phase; 4] = [
    Phase {
        phase: "Phase 1",
        title: "Discovery & Assessment",
        duration: "Days 1-30",
        description: "Deep-dive into your operations, leadership health, and AI readiness. We identify \
                      exactly where your transformation is breaking down.",
        deliverables: [
            "Comprehensive operational audit",
            "Leadership health assessment",
            "AI readiness evaluation",
            "Custom transformation roadmap",
        ],
    },
    Phase {
        phase: "Phase 2",
        title: "Implementation",
        duration: "Days 31-75",
        description: "Simultaneous deployment across all three pillars. Operations, health protocols, \
                      and AI tools, integrated from day one.",
        deliverables: [
            "Process optimization rollout",
            "Leadership performance protocols",
            "AI tool integration",
            "Team training and adoption",
        ],
    },
    Phase {
        phase: "Phase 3",
        title: "Optimization",
        duration: "Days 76-90",
        description: "Fine-tune, measure, and lock in results. Build the systems that ensure your \
                      transformation sustains long after our engagement ends.",
        deliverables: [
            "Performance measurement",
            "Process refinement",
            "Sustainability protocols",
            "Knowledge transfer",
        ],
    },
    Phase {
        phase: "Post-Program",
        title: "Monitoring & Support",
        duration: "90 Days",
        description: "Continued support to ensure results stick. Regular check-ins, adjustments, and \
                      access to ongoing resources.",
        deliverables: [
            "Monthly performance reviews",
            "On-demand support access",
            "Adjustment protocols",
            "Long-term sustainability guidance",
        ],
    },
];

fn timeline_step(phase: &Phase, is_last: bool, delay: u32, visible: bool) -> Html {
    html! {
        <div key={phase.phase} class={classes!("timeline-step", reveal_classes(visible, "reveal-up"))}
            style={delay_style(delay)}>
            <div class="timeline-rail">
                <div class="timeline-marker"></div>
                if !is_last {
                    <div class="timeline-line"></div>
                }
            </div>
            <div class="timeline-body">
                <div class="timeline-meta">
                    <span class="timeline-phase">{phase.phase}</span>
                    <span class="timeline-duration">{phase.duration}</span>
                </div>
                <h3>{phase.title}</h3>
                <p class="muted">{phase.description}</p>
                <ul class="timeline-deliverables">
                    { for phase.deliverables.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    let (section_ref, visible) = use_reveal(0.1);
    let last = PHASES.len() - 1;

    html! {
        <section ref={section_ref} id="process" class="section section-process" aria-labelledby="process-heading">
            <div class="container two-column">
                <div class="sticky-column">
                    <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"The Process"}</span>
                    <h2 id="process-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                        {"90-Day Bio-Operational Transformation"}
                    </h2>
                    <p class={classes!("lead", reveal_classes(visible, "reveal-up"))} style={delay_style(200)}>
                        {"A structured, proven process that delivers measurable results. Not a cookie-cutter \
                          framework but a personalized transformation built around your specific challenges and goals."}
                    </p>
                    <div class={classes!("metric-grid", reveal_classes(visible, "reveal-up"))} style={delay_style(300)}>
                        <div class="metric">
                            <div class="metric-value">{"90-180"}</div>
                            <div class="muted">{"Days to transformation"}</div>
                        </div>
                        <div class="metric">
                            <div class="metric-value">{"3-10×"}</div>
                            <div class="muted">{"Typical performance gain"}</div>
                        </div>
                    </div>
                    <a href="#assessment" class={classes!("text-link", reveal_classes(visible, "reveal-fade"))}
                        style={delay_style(400)} onclick={anchor_click("#assessment", None)}>
                        {"Start your transformation →"}
                    </a>
                </div>

                <div class="timeline">
                    { for PHASES.iter().enumerate().map(|(index, phase)| {
                        timeline_step(phase, index == last, index as u32 * 150, visible)
                    }) }
                </div>
            </div>
        </section>
    }
}
