mod components;
mod config;
mod github;

use components::SiteFooter;
use dioxus::logger::tracing::{Level, info, warn};
use dioxus::prelude::*;
use dioxus_desktop::launch::launch_virtual_dom;
use dioxus_desktop::{Config, LogicalSize, tao::window::WindowBuilder};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {}", e);
    }

    if let Err(e) = config::AppConfig::init() {
        warn!("Failed to write default config: {}", e);
    }

    let window_width = 800.0;
    let window_height = 600.0;

    info!("Starting site-footer ({}x{})", window_width, window_height);
    let window_builder = WindowBuilder::new()
        .with_always_on_top(false)
        .with_title("Agentic Coding Boilerplate")
        .with_inner_size(LogicalSize::new(window_width, window_height));
    let virtual_dom = VirtualDom::new(App);
    let platform_config = Config::new().with_window(window_builder);

    launch_virtual_dom(virtual_dom, platform_config)
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "flex min-h-screen flex-col",
            main { class: "flex-1" }
            SiteFooter {}
        }
    }
}
