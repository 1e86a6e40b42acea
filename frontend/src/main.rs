use log::{error, info};
use yew::prelude::*;

use contact_site::config::{self, BehaviorConfig};
use contact_site::page::web::WebPage;
use contact_site::scheduler::TimerScheduler;
use contact_site::Behaviors;

mod components {
    pub mod contact_form;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // The markup never re-renders, so behaviors are attached exactly once.
    use_effect_with_deps(
        move |_| {
            match WebPage::new() {
                Ok(page) => {
                    Behaviors::attach_all(&page, &TimerScheduler, &BehaviorConfig::default());
                }
                Err(err) => error!("Page behaviors not attached: {}", err),
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
