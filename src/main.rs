//! Browser entry point. The server hands every page the same bundle; the
//! path picks what gets mounted.

use f1_stats::routes::NAV_LINKS;
use f1_stats::Page;
use log::info;
use yew::prelude::*;

mod cache;
mod components;
mod config;
mod hooks;
mod pages;
mod utils;

use config::LOG_LEVEL;
use pages::*;
use utils::current_path;

fn render_nav(path: &str) -> Html {
    html! {
        <nav class="navbar">
            <a class="brand" href="/">{ "F1 Stats" }</a>
            <ul class="nav-links">
                { for NAV_LINKS.iter().map(|(label, href)| {
                    let active = if *href == "/" { path == "/" } else { path.starts_with(href) };
                    html! {
                        <li><a class={classes!(active.then_some("active"))} href={*href}>{ *label }</a></li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    let path = current_path();
    let page = Page::from_path(&path);

    use_effect_with(page.clone(), |page| {
        gloo_utils::document().set_title(&format!("{} | F1 Stats", page.title()));
        || ()
    });

    let body = match page {
        Page::Home => html! { <HomePage /> },
        Page::Drivers => html! { <DriversPage /> },
        Page::Constructors => html! { <ConstructorsPage /> },
        Page::Races => html! { <RacesPage /> },
        Page::RaceDetail(race_id) => html! { <RaceDetailPage {race_id} /> },
        Page::CircuitDetail(circuit_id) => html! { <CircuitDetailPage {circuit_id} /> },
        Page::RaceStats => html! { <RaceStatsPage /> },
        Page::Compare => html! { <ComparePage /> },
        Page::AddData => html! { <AddDataPage /> },
        Page::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            { render_nav(&path) }
            <main class="container">{ body }</main>
        </>
    }
}

/// Entry point: logging, panic hook, then the renderer.
fn main() {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    console_error_panic_hook::set_once();
    info!("mounting {}", current_path());
    yew::Renderer::<App>::new().render();
}
