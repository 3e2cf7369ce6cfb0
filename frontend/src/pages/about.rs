use yew::prelude::*;

use crate::config;
use crate::navigation::link_target;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

const CREDENTIALS: [(&str, &str); 3] = [
    ("20+ Years", "Manufacturing Operations Leadership"),
    ("Certified", "Metabolic Health Specialist"),
    ("AI Generalist", "Practical AI Implementation"),
];

#[function_component(About)]
pub fn about() -> Html {
    let (section_ref, visible) = use_reveal(0.15);
    let (target, rel) = link_target(config::LINKEDIN_URL);

    html! {
        <section ref={section_ref} id="about" class="section section-about" aria-labelledby="about-heading">
            <div class="container two-column">
                <div>
                    <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"About Me"}</span>
                    <h2 id="about-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                        {"I've Lived What I Now Solve"}
                    </h2>
                    <div class={classes!("prose", reveal_classes(visible, "reveal-up"))} style={delay_style(200)}>
                        <p>
                            {"After two decades scaling manufacturing operations across industries, \
                              I discovered something that changed everything: "}
                            <strong>
                                {"the same biological systems I was optimizing in factories were breaking down in leaders."}
                            </strong>
                        </p>
                        <p>
                            {"I watched brilliant executives, including myself, burn out while driving \
                              operational excellence. Lean initiatives would launch strong, then fade. \
                              AI tools would get implemented, then ignored."}
                        </p>
                        <p>
                            {"The problem wasn't the strategy. It was treating operations, human \
                              performance, and technology as separate disciplines."}
                        </p>
                        <p class="text-white">
                            {"Now I help manufacturing leaders achieve transformations that actually \
                              stick, by integrating what most consultants keep apart."}
                        </p>
                    </div>

                    <div class={classes!("credential-grid", reveal_classes(visible, "reveal-up"))} style={delay_style(300)}>
                        { for CREDENTIALS.into_iter().enumerate().map(|(index, (title, description))| html! {
                            <div key={title} class="credential" style={delay_style(300 + index as u32 * 100)}>
                                <div class="credential-title">{title}</div>
                                <div class="credential-description">{description}</div>
                            </div>
                        }) }
                    </div>

                    <a href={config::LINKEDIN_URL} target={target} rel={rel}
                        class={classes!("text-link", reveal_classes(visible, "reveal-fade"))} style={delay_style(500)}>
                        {"Connect on LinkedIn"}
                    </a>
                </div>

                <div class={reveal_classes(visible, "reveal-right")} style={delay_style(300)}>
                    <div class="glass-panel quote-card">
                        <div class="quote-mark">{"\u{201C}"}</div>
                        <blockquote>
                            {"Your operations aren't failing because your processes are wrong. \
                              They're failing because your leaders are too burned out to sustain them."}
                        </blockquote>
                        <div class="quote-author">
                            <img src="/assets/sachin.png" alt={config::SITE_OWNER} />
                            <div>
                                <div class="text-white">{config::SITE_OWNER}</div>
                                <div class="muted">{"Bio-Operational Transformation Expert"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
