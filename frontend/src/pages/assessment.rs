use yew::prelude::*;

use crate::config;
use crate::navigation::link_target;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

const BENEFITS: [&str; 4] = [
    "Identify your specific transformation bottleneck",
    "Get a personalized assessment of all three pillars",
    "Receive actionable insights, even if we don't work together",
    "No hard sell. Just an honest conversation about your challenges",
];

#[function_component(Assessment)]
pub fn assessment() -> Html {
    let (section_ref, visible) = use_reveal(0.15);
    let (target, rel) = link_target(config::BOOKING_URL);

    html! {
        <section ref={section_ref} id="assessment" class="section section-assessment"
            aria-labelledby="assessment-heading">
            <div class="container narrow">
                <div class={classes!("booking-card", reveal_classes(visible, "reveal-up"))}>
                    <div class="section-header centered">
                        <span class={classes!("pill", reveal_classes(visible, "reveal-up"))} style={delay_style(100)}>
                            {"Free Discovery Assessment"}
                        </span>
                        <h2 id="assessment-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(200)}>
                            {"Ready to Break the Cycle?"}
                        </h2>
                        <p class={classes!("lead", reveal_classes(visible, "reveal-up"))} style={delay_style(300)}>
                            {"Book a 45-minute discovery call to identify exactly where your transformation is \
                              breaking down, and what it would take to fix it."}
                        </p>
                    </div>

                    <div class="booking-columns">
                        <div class={reveal_classes(visible, "reveal-left")} style={delay_style(400)}>
                            <h3>{"What you'll get from this call:"}</h3>
                            <ul class="fit-list">
                                { for BENEFITS.into_iter().map(|benefit| html! {
                                    <li key={benefit}><span class="fit-mark">{"✓"}</span><span>{benefit}</span></li>
                                }) }
                            </ul>
                            <div class="muted small">{"45 minutes • No obligation • Virtual meeting"}</div>
                        </div>

                        <div class={classes!("booking-cta", reveal_classes(visible, "reveal-right"))} style={delay_style(500)}>
                            <a href={config::BOOKING_URL} target={target} rel={rel} class="btn-primary btn-large">
                                {"Book Your Discovery Call →"}
                            </a>
                            <p class="muted small">{"Select a time that works for you"}</p>
                        </div>
                    </div>
                </div>

                <p class={classes!("testimonial", reveal_classes(visible, "reveal-up"))} style={delay_style(600)}>
                    {"\"The discovery call alone gave me more clarity about our operational challenges than \
                      months of internal analysis.\""}
                    <span class="testimonial-author">{"Manufacturing VP, $120M Revenue Company"}</span>
                </p>
            </div>
        </section>
    }
}
