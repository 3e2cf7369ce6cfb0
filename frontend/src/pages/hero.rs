use yew::prelude::*;

use crate::animation::HEADLINE_STAGGER_MS;
use crate::components::scramble_text::ScrambleText;
use crate::config;
use crate::navigation::anchor_click;
use crate::timer::{BrowserScheduler, BrowserTimer, Scheduler};
use crate::visibility::use_reveal;

/// Entrance fade starts this long after mount.
const LOAD_DELAY_MS: u32 = 100;
/// First headline phrase starts scrambling into place this long after the
/// hero is loaded and on screen.
const FIRST_SCRAMBLE_DELAY_MS: u32 = 800;

const TRUST_INDICATORS: [&str; 3] = ["90-Day Transformation", "Proven ROI", "20+ Years Operations"];

#[function_component(Hero)]
pub fn hero() -> Html {
    let (hero_ref, visible) = use_reveal(0.1);
    let loaded = use_state(|| false);
    let start_first = use_state(|| false);
    let start_second = use_state(|| false);
    let stagger = use_mut_ref(|| None::<BrowserTimer>);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = BrowserScheduler.after(LOAD_DELAY_MS, move || loaded.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    {
        let start_first = start_first.clone();
        use_effect_with_deps(
            move |(loaded, visible): &(bool, bool)| {
                let timer = (*loaded && *visible).then(|| {
                    log::debug!("hero on screen, starting headline");
                    BrowserScheduler.after(FIRST_SCRAMBLE_DELAY_MS, move || start_first.set(true))
                });
                move || drop(timer)
            },
            (*loaded, visible),
        );
    }

    {
        let stagger = stagger.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let pending = stagger.borrow_mut().take();
                    drop(pending);
                }
            },
            (),
        );
    }

    let on_first_complete = {
        let start_second = start_second.clone();
        let stagger = stagger.clone();
        Callback::from(move |_: ()| {
            let start_second = start_second.clone();
            let timer = BrowserScheduler.after(HEADLINE_STAGGER_MS, move || start_second.set(true));
            *stagger.borrow_mut() = Some(timer);
        })
    };

    let fade = |base: &'static str| classes!(base, "fade-up", (*loaded).then(|| "is-visible"));

    html! {
        <section ref={hero_ref} id="hero" class="hero" aria-label="Hero section">
            <div class="hero-glow hero-glow-primary"></div>
            <div class="hero-glow hero-glow-accent"></div>
            <div class="hero-grid"></div>

            <div class="container hero-layout">
                <div class={classes!("hero-photo", "fade-left", (*loaded).then(|| "is-visible"))}>
                    <img src="/assets/sachin.png"
                        alt="Sachin Chiplunkar - Bio-Operational Transformation Expert"
                        loading="eager" />
                </div>

                <div class="hero-content">
                    <div class={fade("hero-badge-row")} style="transition-delay: 200ms;">
                        <span class="badge">{config::TAGLINE}</span>
                    </div>

                    <h1 class={fade("hero-headline")} style="transition-delay: 300ms;">
                        <span class="text-white">{"Stop "}</span>
                        <ScrambleText
                            text="Wasting Money"
                            class={classes!("text-alert")}
                            start={*start_first}
                            duration={1200}
                            on_complete={on_first_complete}
                        />
                        <span class="text-white">{" on Transformations That "}</span>
                        <ScrambleText
                            text="Don't Stick"
                            class={classes!("text-gradient-animated")}
                            start={*start_second}
                            duration={1000}
                        />
                    </h1>

                    <p class={fade("hero-subheadline")} style="transition-delay: 400ms;">
                        {"I help manufacturing executives achieve "}
                        <strong>{"10× operational performance"}</strong>
                        {" by fixing the three reasons most initiatives fail: broken processes, \
                          burned-out leaders, and disconnected AI systems."}
                    </p>

                    <div class={fade("hero-ctas")} style="transition-delay: 500ms;">
                        <a href="#assessment" class="btn-primary" onclick={anchor_click("#assessment", None)}>
                            {"See Why Transformations Fail →"}
                        </a>
                        <a href="#method" class="btn-secondary" onclick={anchor_click("#method", None)}>
                            {"Learn the Method"}
                        </a>
                    </div>

                    <div class={fade("hero-trust")} style="transition-delay: 600ms;">
                        { for TRUST_INDICATORS.into_iter().enumerate().map(|(index, item)| html! {
                            <div key={item} class="trust-item"
                                style={format!("transition-delay: {}ms;", 600 + index * 100)}>
                                <span class="check">{"✓"}</span>
                                <span>{item}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class={fade("scroll-indicator")} style="transition-delay: 800ms;">
                <span>{"Scroll"}</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}
