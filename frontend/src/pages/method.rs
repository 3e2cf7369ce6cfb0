use yew::prelude::*;

use crate::navigation::anchor_click;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Primary,
    Accent,
    Alert,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Accent => "tone-accent",
            Tone::Alert => "tone-alert",
        }
    }
}

struct Pillar {
    number: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    outcomes: [&'static str; 3],
    tone: Tone,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        number: "01",
        title: "Operational Excellence",
        subtitle: "Pillar One",
        description: "Lean manufacturing principles enhanced with systems thinking. We identify bottlenecks, \
                      streamline workflows, and build sustainable processes.",
        outcomes: ["2-10× efficiency gains", "Waste elimination protocols", "Scalable process frameworks"],
        tone: Tone::Primary,
    },
    Pillar {
        number: "02",
        title: "Human Optimization",
        subtitle: "Pillar Two",
        description: "Metabolic health and cognitive performance protocols for leadership. Because \
                      burned-out leaders can't sustain operational improvements.",
        outcomes: [
            "Leadership energy restoration",
            "Stress resilience training",
            "Sustainable performance habits",
        ],
        tone: Tone::Accent,
    },
    Pillar {
        number: "03",
        title: "AI Integration",
        subtitle: "Pillar Three",
        description: "Practical AI implementation that works with your operations, not against them. \
                      No hype, just tools that deliver measurable ROI.",
        outcomes: [
            "Data-driven decision making",
            "Process automation that sticks",
            "AI adoption without resistance",
        ],
        tone: Tone::Alert,
    },
];

fn pillar_card(pillar: &Pillar, delay: u32, visible: bool) -> Html {
    html! {
        <div key={pillar.title} class={classes!("pillar", pillar.tone.class(), reveal_classes(visible, "reveal-up"))}
            style={delay_style(delay)}>
            <div class="pillar-number">{pillar.number}</div>
            <div class="pillar-subtitle">{pillar.subtitle}</div>
            <h3>{pillar.title}</h3>
            <p class="muted">{pillar.description}</p>
            <ul class="pillar-outcomes">
                { for pillar.outcomes.iter().map(|outcome| html! { <li key={*outcome}>{"→ "}{*outcome}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Method)]
pub fn method() -> Html {
    let (section_ref, visible) = use_reveal(0.1);

    html! {
        <section ref={section_ref} id="method" class="section section-method" aria-labelledby="method-heading">
            <div class="container">
                <div class="section-header centered">
                    <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"The Method"}</span>
                    <h2 id="method-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                        {"Bio-Operational Transformation"}
                    </h2>
                    <p class={classes!("lead", reveal_classes(visible, "reveal-up"))} style={delay_style(200)}>
                        {"Three pillars. One integrated system. Most consultants address these separately. \
                          That's why their results don't last. "}
                        <span class="text-white">{"Integration is the multiplier."}</span>
                    </p>
                </div>

                <div class="pillar-grid">
                    { for PILLARS.iter().enumerate().map(|(index, pillar)| pillar_card(pillar, index as u32 * 150, visible)) }
                </div>

                <div class={classes!("integration-callout", reveal_classes(visible, "reveal-up"))} style={delay_style(500)}>
                    <div>
                        <div class="callout-title">{"Integration = 10× Results"}</div>
                        <div class="muted">{"When all three pillars work together, transformations stick."}</div>
                    </div>
                    <a href="#process" class="btn-primary" onclick={anchor_click("#process", None)}>
                        {"See the Process →"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillars_use_distinct_tones() {
        let tones: Vec<_> = PILLARS.iter().map(|p| p.tone.class()).collect();
        assert_eq!(tones, ["tone-primary", "tone-accent", "tone-alert"]);
    }
}
