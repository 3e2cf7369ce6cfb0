use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::anchor_click;
use crate::visibility::{delay_style, reveal_classes, use_reveal};

const FAQ_ITEMS: [(&str, &str); 6] = [
    (
        "Do I need all three pillars, or can I just focus on operations?",
        "You can absolutely start with operations. That's usually why people reach out. However, if you've \
         already tried operational improvements that didn't stick, the reason is almost always connected to the \
         other pillars. The discovery call helps us identify where your specific bottleneck is. Many clients are \
         surprised to find their \"operations problem\" is actually a leadership burnout issue.",
    ),
    (
        "How long does a typical transformation take?",
        "The core program runs 90 days, with an additional 90-day monitoring period. However, the actual \
         timeline depends on your starting point and goals. Some transformations wrap up in 90 days; others \
         require 180 days for full implementation. We'll determine the right scope during the discovery assessment.",
    ),
    (
        "What ROI can I expect from this investment?",
        "Clients typically see 3-10× performance improvements. The exact ROI depends on your baseline and the \
         specific metrics we target. During the discovery assessment, we'll identify your key performance \
         indicators and set realistic, measurable goals. I don't promise specific numbers without understanding \
         your situation first.",
    ),
    (
        "What if my team resists the changes?",
        "Resistance is usually a symptom, not the problem. It often indicates burned-out leaders, past failed \
         initiatives, or poor change communication. That's exactly why we address human performance alongside \
         operations. The Bio-Operational approach is designed to reduce resistance by acknowledging and \
         addressing its root causes.",
    ),
    (
        "How is this different from hiring a lean consultant?",
        "Most lean consultants deliver excellent processes that then get abandoned. They focus on operations in \
         isolation. I integrate operations with leadership health and AI tools because that's where \
         transformations actually sustain. It's not that lean doesn't work; it's that lean alone isn't enough.",
    ),
    (
        "What's the investment for the 90-Day Transformation?",
        "The program investment ranges from $75,000 to $125,000, depending on scope and complexity. This \
         includes the full 90-day implementation plus 90 days of post-program monitoring. We can discuss a paid \
         discovery assessment ($5,000-$8,000) if you want to start smaller and validate the approach before \
         committing to the full program.",
    ),
];

/// At most one answer is open. Clicking the open question closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
    delay: u32,
    visible: bool,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"), reveal_classes(props.visible, "reveal-up"))}
            style={delay_style(props.delay)}>
            <button class="faq-question" onclick={onclick} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let (section_ref, visible) = use_reveal(0.1);
    let open = use_state(|| Some(0usize));

    html! {
        <section ref={section_ref} id="faq" class="section section-faq" aria-labelledby="faq-heading">
            <div class="container narrow">
                <div class="section-header centered">
                    <span class={classes!("eyebrow", reveal_classes(visible, "reveal-up"))}>{"Frequently Asked Questions"}</span>
                    <h2 id="faq-heading" class={reveal_classes(visible, "reveal-up")} style={delay_style(100)}>
                        {"Common Questions"}
                    </h2>
                    <p class={classes!("lead", reveal_classes(visible, "reveal-up"))} style={delay_style(200)}>
                        {"Answers to what most manufacturing leaders ask before we work together."}
                    </p>
                </div>

                <div class={classes!("glass-panel", "faq-list", reveal_classes(visible, "reveal-up"))} style={delay_style(300)}>
                    { for FAQ_ITEMS.into_iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle(*open, index)))
                        };
                        html! {
                            <FaqItem key={index} question={question} answer={answer}
                                is_open={*open == Some(index)}
                                on_toggle={on_toggle}
                                delay={300 + index as u32 * 50}
                                visible={visible} />
                        }
                    }) }
                </div>

                <p class={classes!("faq-footer", reveal_classes(visible, "reveal-up"))} style={delay_style(500)}>
                    {"Have a question not listed here? "}
                    <a href="#assessment" class="text-link" onclick={anchor_click("#assessment", None)}>
                        {"Ask during your discovery call"}
                    </a>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(0), 0), None);
    }

    #[test]
    fn clicking_another_item_moves_the_open_slot() {
        assert_eq!(toggle(Some(0), 3), Some(3));
        assert_eq!(toggle(None, 5), Some(5));
    }

    #[test]
    fn has_six_questions() {
        assert_eq!(FAQ_ITEMS.len(), 6);
        assert!(FAQ_ITEMS.iter().all(|(q, a)| q.ends_with('?') && !a.is_empty()));
    }
}
