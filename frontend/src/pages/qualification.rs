use yew::prelude::*;

use crate::visibility::{delay_style, reveal_classes, use_reveal};

const IDEAL_FOR: [&str; 4] = [
    "Manufacturing executives at $50-250M revenue companies",
    "VP/Director of Operations, COOs, and CEOs",
    "Leaders who've tried lean consultants but results didn't stick",
    "Organizations ready to invest $75K-125K in transformation",
];

const NOT_FOR: [&str; 4] = [
    "Companies looking for quick fixes or band-aid solutions",
    "Leaders not willing to address health alongside operations",
    "Organizations expecting AI to solve everything on its own",
    "Those seeking the cheapest option, not the most effective",
];

#[function_component(Qualification)]
pub fn qualification() -> Html {
    let (section_ref, visible) = use_reveal(0.15);

    let fit_list = |items: [&'static str; 4], mark: &'static str| {
        html! {
            <ul class="fit-list">
                { for items.into_iter().map(|item| html! {
                    <li key={item}><span class="fit-mark">{mark}</span><span>{item}</span></li>
                }) }
            </ul>
        }
    };

    html! {
        <section ref={section_ref} id="qualification" class="section section-qualification"
            aria-labelledby="qualification-heading">
            <div class="container">
                <div class="section-header centered">
                    <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"Is This For You?"}</span>
                    <h2 id="qualification-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                        {"This Isn't For Everyone"}
                    </h2>
                    <p class={classes!("lead", reveal_classes(visible, "reveal-up"))} style={delay_style(200)}>
                        {"I prioritize quality partnerships to deliver deep engagement and real results. \
                          Here's how to know if we're a fit."}
                    </p>
                </div>

                <div class="fit-grid">
                    <div class={classes!("fit-card", "tone-accent", reveal_classes(visible, "reveal-up"))} style={delay_style(300)}>
                        <h3>{"This Is For You If..."}</h3>
                        { fit_list(IDEAL_FOR, "✓") }
                    </div>
                    <div class={classes!("fit-card", "tone-alert", reveal_classes(visible, "reveal-up"))} style={delay_style(400)}>
                        <h3>{"This Is NOT For You If..."}</h3>
                        { fit_list(NOT_FOR, "✕") }
                    </div>
                </div>

                <p class={classes!("fine-print", reveal_classes(visible, "reveal-up"))} style={delay_style(500)}>
                    {"Still unsure? The discovery call is designed to help us both determine if there's a fit. \
                      No pressure, no hard sell. Just an honest conversation about your challenges and whether \
                      this approach makes sense for you."}
                </p>
            </div>
        </section>
    }
}
