use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::scroll_to_top::ScrollToTop;
use crate::pages::about::About;
use crate::pages::assessment::Assessment;
use crate::pages::faq::Faq;
use crate::pages::hero::Hero;
use crate::pages::insights::Insights;
use crate::pages::method::Method;
use crate::pages::problem::Problem;
use crate::pages::process::Process;
use crate::pages::qualification::Qualification;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <Nav />
            <main>
                <Hero />
                <Problem />
                <About />
                <Method />
                <Process />
                <Qualification />
                <Insights />
                <Faq />
                <Assessment />
            </main>
            <ScrollToTop />
            <Footer />
        </div>
    }
}
