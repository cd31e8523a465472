use crate::components::{render_badge, render_empty, render_error, render_loading, render_stat};
use crate::config::api_client;
use crate::hooks::{use_remote, FetchState};
use f1_stats::format::{coordinate_pair, decimal_or_na, map_embed_url, or_dash, or_na, prettify};
use f1_stats::models::{Circuit, CircuitRace};
use f1_stats::routes::race_href;
use yew::prelude::*;

fn render_hero(circuit: &Circuit) -> Html {
    let name = circuit
        .full_name
        .clone()
        .or_else(|| circuit.name.clone())
        .unwrap_or_else(|| circuit.id.clone());
    html! {
        <section class="circuit-hero">
            <h1>{ name }</h1>
            <div class="circuit-location">
                { format!("{}, {}", or_na(circuit.place_name.as_deref(), ""), or_na(circuit.country_name.as_deref(), "")) }
            </div>
            <div class="hero-stats">
                { render_stat("Length", decimal_or_na(circuit.length, 3, " km")) }
                { render_stat("Turns", or_na(circuit.turns, "")) }
                { render_stat("Races Held", or_na(circuit.total_races_held, "")) }
            </div>
        </section>
    }
}

fn render_overview(circuit: &Circuit) -> Html {
    html! {
        <section class="circuit-overview">
            <h2>{ "Overview" }</h2>
            <div class="stat-grid">
                { render_stat("Type", prettify(circuit.kind.as_deref())) }
                { render_stat("Direction", prettify(circuit.direction.as_deref())) }
                { render_stat("Location", or_na(circuit.place_name.as_deref(), "")) }
                { render_stat("Country", or_na(circuit.country_name.as_deref(), "")) }
                { render_stat("Coordinates", coordinate_pair(circuit.latitude, circuit.longitude)) }
            </div>
        </section>
    }
}

fn render_map(circuit: &Circuit) -> Html {
    let body = match map_embed_url(circuit.latitude, circuit.longitude) {
        Some(src) => html! {
            <iframe class="circuit-map" {src} loading="lazy" title="Circuit location"></iframe>
        },
        None => html! { <div class="map-placeholder">{ "Location not available" }</div> },
    };
    html! {
        <section class="circuit-map-section">
            <h2>{ "Location" }</h2>
            { body }
        </section>
    }
}

fn render_races(races: &FetchState<Vec<CircuitRace>>) -> Html {
    let list = match races {
        FetchState::Loading => render_loading("races"),
        FetchState::Failed(_) => render_error("Unable to load races for this circuit."),
        FetchState::Ready(rows) if rows.is_empty() => render_empty("No races held at this circuit."),
        FetchState::Ready(rows) => rows
            .iter()
            .map(|race| {
                let (badge, badge_class) = if race.is_real {
                    ("Official", "official")
                } else {
                    ("Simulated", "simulated")
                };
                let title = race.official_name.clone().unwrap_or_else(|| "Race".to_string());
                let meta = format!(
                    "Round {} • {} participants",
                    or_dash(race.round),
                    or_dash(race.participant_count)
                );
                let inner = html! {
                    <>
                        <div class="race-title">{ title }</div>
                        <div class="race-meta">{ meta }</div>
                        { render_badge(badge, badge_class) }
                    </>
                };
                match race.id {
                    Some(id) => html! { <a class="circuit-race" href={race_href(id)}>{ inner }</a> },
                    None => html! { <div class="circuit-race">{ inner }</div> },
                }
            })
            .collect::<Html>(),
    };
    html! {
        <section class="circuit-races">
            <h2>{ "Races" }</h2>
            { list }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CircuitDetailPageProps {
    pub circuit_id: String,
}

#[function_component(CircuitDetailPage)]
pub fn circuit_detail_page(props: &CircuitDetailPageProps) -> Html {
    let api = api_client();
    let circuit = {
        let api = api.clone();
        use_remote(props.circuit_id.clone(), move |id: String| async move { api.circuit(&id).await })
    };
    let races = use_remote(props.circuit_id.clone(), move |id: String| async move {
        api.circuit_races(&id).await
    });

    html! {
        <div class="page circuit-detail-page">
            {
                match &circuit {
                    FetchState::Loading => render_loading("circuit"),
                    FetchState::Failed(e) => render_error(&format!("Failed to load circuit: {}", e)),
                    FetchState::Ready(c) => html! {
                        <>
                            { render_hero(c) }
                            <div class="circuit-body">
                                { render_overview(c) }
                                { render_map(c) }
                            </div>
                        </>
                    },
                }
            }
            { render_races(&races) }
        </div>
    }
}
