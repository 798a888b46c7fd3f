use yew::prelude::*;

use crate::hooks::use_page_mount;
use crate::sections::{
    about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills,
    testimonials::Testimonials, timeline::Timeline,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_page_mount("Route:Home");

    html! {
        <main class="home">
            <Hero />
            <About />
            <Skills />
            <Timeline />
            <Projects />
            <Testimonials />
            <Contact />
        </main>
    }
}
