use log::info;
use yew::prelude::*;

mod config;
mod content;
mod style;
mod interactions {
    pub mod image_fallback;
    pub mod nav;
    pub mod nav_scope;
    pub mod order_form;
    pub mod scroll_lock;
}
mod seo {
    pub mod head;
    pub mod structured_data;
}
mod components {
    pub mod faq_item;
    pub mod header;
    pub mod order_form;
    pub mod picture;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Head tags live exactly as long as the app is mounted
    use_effect_with_deps(
        move |_| {
            let managed = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| seo::head::install(&document, &seo::head::site_head_tags()));
            move || drop(managed)
        },
        (),
    );

    info!("Rendering landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
