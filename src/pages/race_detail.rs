use crate::components::{render_badge, render_empty, render_error, render_loading, render_stat};
use crate::config::api_client;
use crate::hooks::{use_remote, FetchState};
use crate::pages::races::RaceResults;
use f1_stats::format::{decimal_or_na, number, or_dash, or_na, prettify, short_coordinates};
use f1_stats::models::{ConstructorStanding, DriverStanding, Race};
use f1_stats::routes::circuit_href;
use f1_stats::ApiError;
use futures::join;
use yew::prelude::*;

type StandingsPair = (
    Result<Vec<DriverStanding>, String>,
    Result<Vec<ConstructorStanding>, String>,
);

fn render_meta(race: &Race) -> Html {
    let (badge, badge_class) = if race.is_real {
        ("Official", "official")
    } else {
        ("Simulated", "simulated")
    };
    html! {
        <section class="race-hero">
            <h1>{ race.title() }</h1>
            { render_badge(badge, badge_class) }
            <div class="stat-grid">
                { render_stat("Year", or_na(race.year, "")) }
                { render_stat("Round", or_na(race.round, "")) }
                { render_stat("Date", or_na(race.date.as_deref(), "")) }
                { render_stat("Laps", or_na(race.laps, "")) }
                { render_stat("Qualifying Format", prettify(race.qualifying_format.as_deref())) }
                { render_stat("Qualifying Date", or_na(race.qualifying_date.as_deref(), "")) }
            </div>
        </section>
    }
}

fn render_circuit_card(race: &Race) -> Html {
    let name = or_na(race.circuit_name.as_deref(), "");
    html! {
        <section class="circuit-card">
            <h2>{ "Circuit" }</h2>
            if let Some(id) = race.circuit_id.as_deref() {
                <a class="circuit-name" href={circuit_href(id)}>{ name }</a>
            } else {
                <div class="circuit-name">{ name }</div>
            }
            <div class="stat-grid">
                { render_stat("Location", or_na(race.circuit_place_name.as_deref(), "")) }
                { render_stat("Country", or_na(race.circuit_country.as_deref().or(race.country_name.as_deref()), "")) }
                { render_stat("Length", decimal_or_na(race.circuit_length, 3, " km")) }
                { render_stat("Turns", or_na(race.circuit_turns, "")) }
                { render_stat("Direction", prettify(race.circuit_direction.as_deref())) }
                { render_stat("Type", prettify(race.circuit_type.as_deref())) }
                { render_stat("Races Held", or_na(race.circuit_total_races, "")) }
                { render_stat("Coordinates", short_coordinates(race.circuit_latitude, race.circuit_longitude)) }
            </div>
        </section>
    }
}

fn render_driver_standings(rows: &Result<Vec<DriverStanding>, String>) -> Html {
    match rows {
        Err(_) => render_error("Unable to load driver standings."),
        Ok(rows) if rows.is_empty() => render_empty("No driver standings for this race."),
        Ok(rows) => html! {
            <table class="standings-table">
                <thead>
                    <tr><th>{ "Pos" }</th><th>{ "Driver" }</th><th>{ "Nationality" }</th><th>{ "Points" }</th></tr>
                </thead>
                <tbody>
                    { rows.iter().map(|s| html! {
                        <tr>
                            <td>{ or_dash(s.position_number) }</td>
                            <td>{ or_dash(s.driver_name.as_deref().or(s.driver_id.as_deref())) }</td>
                            <td>{ or_dash(s.nationality.as_deref()) }</td>
                            <td>{ number(s.points) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        },
    }
}

fn render_constructor_standings(rows: &Result<Vec<ConstructorStanding>, String>) -> Html {
    match rows {
        Err(_) => render_error("Unable to load constructor standings."),
        Ok(rows) if rows.is_empty() => render_empty("No constructor standings for this race."),
        Ok(rows) => html! {
            <table class="standings-table">
                <thead>
                    <tr><th>{ "Pos" }</th><th>{ "Constructor" }</th><th>{ "Country" }</th><th>{ "Points" }</th></tr>
                </thead>
                <tbody>
                    { rows.iter().map(|s| html! {
                        <tr>
                            <td>{ or_dash(s.position_number) }</td>
                            <td>{ or_dash(s.constructor_name.as_deref().or(s.constructor_id.as_deref())) }</td>
                            <td>{ or_dash(s.country_name.as_deref()) }</td>
                            <td>{ number(s.points) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct RaceDetailPageProps {
    pub race_id: String,
}

#[function_component(RaceDetailPage)]
pub fn race_detail_page(props: &RaceDetailPageProps) -> Html {
    let api = api_client();
    let race = {
        let api = api.clone();
        use_remote(props.race_id.clone(), move |id: String| async move { api.race(&id).await })
    };
    // Both standings tables load side by side and fail on their own.
    let standings: FetchState<StandingsPair> =
        use_remote(props.race_id.clone(), move |id: String| async move {
            let (drivers, constructors) =
                join!(api.driver_standings(&id), api.constructor_standings(&id));
            Ok::<_, ApiError>((
                drivers.map_err(|e| e.to_string()),
                constructors.map_err(|e| e.to_string()),
            ))
        });

    html! {
        <div class="page race-detail-page">
            {
                match &race {
                    FetchState::Loading => render_loading("race"),
                    FetchState::Failed(e) => render_error(&format!("Failed to load race: {}", e)),
                    FetchState::Ready(r) => html! {
                        <>
                            { render_meta(r) }
                            { render_circuit_card(r) }
                        </>
                    },
                }
            }

            <section class="results-section">
                <h2>{ "Results" }</h2>
                <RaceResults race_id={props.race_id.clone()} />
            </section>

            <div class="standings-grid">
                <section class="standings-box">
                    <h2>{ "Driver Standings" }</h2>
                    {
                        match &standings {
                            FetchState::Ready((drivers, _)) => render_driver_standings(drivers),
                            FetchState::Failed(_) => render_error("Unable to load driver standings."),
                            FetchState::Loading => render_loading("standings"),
                        }
                    }
                </section>
                <section class="standings-box">
                    <h2>{ "Constructor Standings" }</h2>
                    {
                        match &standings {
                            FetchState::Ready((_, constructors)) => render_constructor_standings(constructors),
                            FetchState::Failed(_) => render_error("Unable to load constructor standings."),
                            FetchState::Loading => render_loading("standings"),
                        }
                    }
                </section>
            </div>
        </div>
    }
}
