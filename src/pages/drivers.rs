use crate::components::{render_empty, render_error, render_loading, render_stat, DetailPanel, PaginationBar};
use crate::config::api_client;
use crate::hooks::{use_remote, FetchState};
use crate::utils::bind_text;
use f1_stats::api::DriverPage;
use f1_stats::filters::DriverFilters;
use f1_stats::format::{number, or_dash, or_na};
use f1_stats::models::Driver;
use yew::prelude::*;

fn render_card(driver: &Driver, on_open: Callback<String>) -> Html {
    let id = driver.id.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_open.emit(id.clone()));
    let subtitle = [
        driver.nationality.clone(),
        driver.permanent_number.map(|n| format!("#{}", n)),
        driver.abbreviation.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" • ");

    html! {
        <div class="card" {onclick}>
            <div class="card-header">
                <div class="name">{ driver.display_name() }</div>
                <div class="nation">{ subtitle }</div>
            </div>
            <div class="card-stats">
                { render_stat("Titles", or_dash(driver.total_championship_wins)) }
                { render_stat("Wins", or_dash(driver.total_race_wins)) }
                { render_stat("Poles", or_dash(driver.total_pole_positions)) }
                { render_stat("Podiums", or_dash(driver.total_podiums)) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DriverDetailProps {
    id: String,
    on_close: Callback<()>,
}

#[function_component(DriverDetail)]
fn driver_detail(props: &DriverDetailProps) -> Html {
    let api = api_client();
    let state = use_remote(props.id.clone(), move |id: String| async move {
        api.driver(&id).await
    });

    let (title, body) = match &state {
        FetchState::Loading => ("Driver".to_string(), render_loading("driver")),
        FetchState::Failed(e) => ("Driver".to_string(), render_error(e)),
        FetchState::Ready(d) => (
            d.full_name.clone().unwrap_or_else(|| d.display_name().to_string()),
            html! {
                <>
                    <div class="stat-grid">
                        { render_stat("Championships", or_na(d.total_championship_wins, "")) }
                        { render_stat("Race Starts", or_na(d.total_race_starts, "")) }
                        { render_stat("Wins", or_na(d.total_race_wins, "")) }
                        { render_stat("Podiums", or_na(d.total_podiums, "")) }
                        { render_stat("Poles", or_na(d.total_pole_positions, "")) }
                        { render_stat("Points", number(d.total_points)) }
                        { render_stat("Laps", or_na(d.total_race_laps, "")) }
                    </div>
                    <div class="info-section">
                        { render_stat("Date of Birth", or_na(d.date_of_birth.as_deref(), "")) }
                        { render_stat("Place of Birth", or_na(d.place_of_birth.as_deref(), "")) }
                        { render_stat("Nationality", or_na(d.nationality.as_deref(), "")) }
                        { render_stat("Number", or_na(d.permanent_number, "")) }
                        { render_stat("Best Championship", or_na(d.best_championship_position.as_deref(), "")) }
                        { render_stat("Best Race Result", or_na(d.best_race_result.as_deref(), "")) }
                    </div>
                </>
            },
        ),
    };

    html! {
        <DetailPanel title={title} on_close={props.on_close.clone()}>
            { body }
        </DetailPanel>
    }
}

#[function_component(DriversPage)]
pub fn drivers_page() -> Html {
    let name = use_state(String::new);
    let nationality = use_state(String::new);
    // (applied filters, page)
    let applied = use_state(|| (DriverFilters::default(), 1u32));
    let selected = use_state(|| None::<String>);

    let api = api_client();
    let list: FetchState<DriverPage> = use_remote((*applied).clone(), move |(filters, page)| async move {
        api.list_drivers(&filters, page).await
    });

    let onsubmit = {
        let name = name.clone();
        let nationality = nationality.clone();
        let applied = applied.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filters = DriverFilters {
                name: (*name).clone(),
                nationality: (*nationality).clone(),
            };
            applied.set((filters, 1));
        })
    };
    let onreset = {
        let name = name.clone();
        let nationality = nationality.clone();
        let applied = applied.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            nationality.set(String::new());
            applied.set((DriverFilters::default(), 1));
        })
    };
    let on_page = {
        let applied = applied.clone();
        Callback::from(move |page: u32| applied.set((applied.0.clone(), page)))
    };
    let on_open = {
        let selected = selected.clone();
        Callback::from(move |id: String| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="page drivers-page">
            <h1>{ "Drivers" }</h1>
            <form class="filters" {onsubmit}>
                <input type="text" placeholder="Name" value={(*name).clone()} oninput={bind_text(&name)} />
                <input type="text" placeholder="Nationality" value={(*nationality).clone()} oninput={bind_text(&nationality)} />
                <button type="submit" class="btn-primary">{ "Apply" }</button>
                <button type="button" class="btn-secondary" onclick={onreset}>{ "Reset" }</button>
            </form>

            {
                match &list {
                    FetchState::Loading => render_loading("drivers"),
                    FetchState::Failed(e) => render_error(e),
                    FetchState::Ready(page) if page.drivers.is_empty() => render_empty("No drivers found."),
                    FetchState::Ready(page) => html! {
                        <>
                            <div class="card-grid">
                                { page.drivers.iter().map(|d| render_card(d, on_open.clone())).collect::<Html>() }
                            </div>
                            <PaginationBar
                                current={page.pagination.current()}
                                total={page.pagination.total()}
                                on_page={on_page.clone()}
                            />
                        </>
                    },
                }
            }

            if let Some(id) = (*selected).clone() {
                <DriverDetail {id} {on_close} />
            }
        </div>
    }
}
