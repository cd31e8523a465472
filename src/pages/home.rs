use f1_stats::routes::NAV_LINKS;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home-page">
            <h1>{ "F1 Stats" }</h1>
            <p class="lead">{ "Browse drivers, constructors and races, compare two drivers at a circuit, or add your own data." }</p>
            <div class="card-grid">
                { for NAV_LINKS.iter().skip(1).map(|(label, href)| html! {
                    <a class="card nav-card" href={*href}>
                        <div class="name">{ *label }</div>
                    </a>
                }) }
            </div>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found-page">
            <h1>{ "Page not found" }</h1>
            <a href="/">{ "Back to home" }</a>
        </div>
    }
}
