use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::animation::ScrambleAnimation;
use crate::timer::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(1500)]
    pub duration: u32,
    #[prop_or(false)]
    pub start: bool,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
}

/// Text that scrambles until `start` turns true, then locks in left to right
/// over `duration` ms. `on_complete` fires once per mount.
#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let display = use_state(String::new);
    let animation = use_mut_ref(|| None::<ScrambleAnimation<BrowserScheduler>>);

    {
        let display = display.clone();
        let animation = animation.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                let on_frame = move |frame: String| display.set(frame);
                let created = ScrambleAnimation::new(BrowserScheduler, text, SmallRng::from_entropy(), on_frame);
                *animation.borrow_mut() = Some(created);
                move || {
                    let finished = animation.borrow_mut().take();
                    drop(finished);
                }
            },
            props.text.clone(),
        );
    }

    {
        let animation = animation.clone();
        let duration = props.duration;
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |(_, start): &(AttrValue, bool)| {
                if *start {
                    if let Some(animation) = animation.borrow().as_ref() {
                        let on_complete = on_complete.map(|cb| Box::new(move || cb.emit(())) as Box<dyn FnOnce()>);
                        animation.start(duration, on_complete);
                    }
                }
                || ()
            },
            (props.text.clone(), props.start),
        );
    }

    html! {
        <span class={props.class.clone()} aria-label={props.text.clone()}>{ (*display).clone() }</span>
    }
}
