use crate::cache::{cached_results, store_results};
use crate::components::{
    render_badge, render_empty, render_error, render_loading, render_results_table, render_stat,
    DetailPanel, PaginationBar,
};
use crate::config::{api_client, QUALIFYING_FORMATS};
use crate::hooks::{use_remote, FetchState};
use crate::utils::{bind_text, checkbox_checked, select_value};
use f1_stats::api::RacePage;
use f1_stats::ApiError;
use f1_stats::filters::RaceFilters;
use f1_stats::format::{or_dash, or_na, prettify};
use f1_stats::models::{sort_by_display_order, Race};
use f1_stats::routes::race_href;
use log::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RaceResultsProps {
    pub race_id: String,
}

/// Results of one race, fetched once per page and then served from the cache.
#[function_component(RaceResults)]
pub fn race_results(props: &RaceResultsProps) -> Html {
    let api = api_client();
    let state = use_remote(props.race_id.clone(), move |id: String| async move {
        if let Some(rows) = cached_results(&id) {
            debug!("race {} results served from cache", id);
            return Ok(rows);
        }
        let mut rows = api.race_data(Some(&id), 1, None).await?.race_data;
        sort_by_display_order(&mut rows);
        store_results(&id, rows.clone());
        Ok::<_, ApiError>(rows)
    });

    match &state {
        FetchState::Loading => render_loading("results"),
        FetchState::Failed(_) => render_error("Unable to load results."),
        FetchState::Ready(rows) => render_results_table(rows),
    }
}

fn render_card(race: &Race, on_open: Callback<String>) -> Html {
    let id = race.id.map(|id| id.to_string()).unwrap_or_default();
    let onclick = Callback::from(move |_: MouseEvent| on_open.emit(id.clone()));
    let (badge, badge_class) = if race.is_real {
        ("Official", "official")
    } else {
        ("Simulated", "simulated")
    };
    html! {
        <div class="card race-card" {onclick}>
            <div class="card-header">
                <div class="name">{ race.title() }</div>
                <div class="nation">
                    { format!("{} • Round {} • {}", or_dash(race.year), or_dash(race.round), or_dash(race.date.as_deref())) }
                </div>
            </div>
            <div class="card-stats">
                { render_stat("Laps", or_dash(race.laps)) }
                { render_stat("Qualifying", prettify(race.qualifying_format.as_deref())) }
                { render_badge(badge, badge_class) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RaceDetailPanelProps {
    id: String,
    on_close: Callback<()>,
}

#[function_component(RaceDetailPanel)]
fn race_detail_panel(props: &RaceDetailPanelProps) -> Html {
    let api = api_client();
    let state = use_remote(props.id.clone(), move |id: String| async move { api.race(&id).await });

    let (title, meta) = match &state {
        FetchState::Loading => ("Race".to_string(), render_loading("race")),
        FetchState::Failed(e) => ("Race".to_string(), render_error(e)),
        FetchState::Ready(r) => (
            r.title(),
            html! {
                <div class="stat-grid">
                    { render_stat("Year", or_na(r.year, "")) }
                    { render_stat("Round", or_na(r.round, "")) }
                    { render_stat("Date", or_na(r.date.as_deref(), "")) }
                    { render_stat("Circuit", or_na(r.circuit_name.as_deref(), "")) }
                    { render_stat("Laps", or_na(r.laps, "")) }
                    { render_stat("Qualifying Format", prettify(r.qualifying_format.as_deref())) }
                </div>
            },
        ),
    };

    html! {
        <DetailPanel title={title} on_close={props.on_close.clone()}>
            { meta }
            <h3>{ "Results" }</h3>
            <RaceResults race_id={props.id.clone()} />
            <a class="btn-link" href={race_href(&props.id)}>{ "Open race page" }</a>
        </DetailPanel>
    }
}

#[function_component(RacesPage)]
pub fn races_page() -> Html {
    let year = use_state(String::new);
    let round = use_state(String::new);
    let date_from = use_state(String::new);
    let date_to = use_state(String::new);
    let official_name = use_state(String::new);
    let qualifying_format = use_state(String::new);
    let laps_min = use_state(String::new);
    let laps_max = use_state(String::new);
    let real_only = use_state(|| false);
    let applied = use_state(|| (RaceFilters::default(), 1u32));
    let filter_error = use_state(|| None::<String>);
    let selected = use_state(|| None::<String>);

    let api = api_client();
    let list: FetchState<RacePage> = use_remote((*applied).clone(), move |(filters, page)| async move {
        api.list_races(&filters, page).await
    });

    let current_filters = {
        let year = year.clone();
        let round = round.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let official_name = official_name.clone();
        let qualifying_format = qualifying_format.clone();
        let laps_min = laps_min.clone();
        let laps_max = laps_max.clone();
        let real_only = real_only.clone();
        move || RaceFilters {
            year: (*year).clone(),
            round: (*round).clone(),
            date_from: (*date_from).clone(),
            date_to: (*date_to).clone(),
            official_name: (*official_name).clone(),
            qualifying_format: (*qualifying_format).clone(),
            laps_min: (*laps_min).clone(),
            laps_max: (*laps_max).clone(),
            is_real_only: *real_only,
        }
    };

    let onsubmit = {
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filters = current_filters();
            match filters.validate() {
                Ok(()) => {
                    filter_error.set(None);
                    applied.set((filters, 1));
                }
                Err(err) => filter_error.set(Some(err.to_string())),
            }
        })
    };
    let onreset = {
        let fields = [
            year.clone(),
            round.clone(),
            date_from.clone(),
            date_to.clone(),
            official_name.clone(),
            qualifying_format.clone(),
            laps_min.clone(),
            laps_max.clone(),
        ];
        let real_only = real_only.clone();
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |_: MouseEvent| {
            for field in &fields {
                field.set(String::new());
            }
            real_only.set(false);
            filter_error.set(None);
            applied.set((RaceFilters::default(), 1));
        })
    };
    let on_format = {
        let qualifying_format = qualifying_format.clone();
        Callback::from(move |e: Event| qualifying_format.set(select_value(&e)))
    };
    let on_real = {
        let real_only = real_only.clone();
        Callback::from(move |e: Event| real_only.set(checkbox_checked(&e)))
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
        <div class="page races-page">
            <h1>{ "Races" }</h1>
            <form class="filters" {onsubmit}>
                <input type="text" placeholder="Year" maxlength="4" value={(*year).clone()} oninput={bind_text(&year)} />
                <input type="number" min="1" placeholder="Round" value={(*round).clone()} oninput={bind_text(&round)} />
                <input type="text" placeholder="Official name" value={(*official_name).clone()} oninput={bind_text(&official_name)} />
                <select onchange={on_format}>
                    <option value="" selected={qualifying_format.is_empty()}>{ "Any qualifying format" }</option>
                    { for QUALIFYING_FORMATS.iter().map(|f| html! {
                        <option value={*f} selected={*qualifying_format == *f}>{ prettify(Some(*f)) }</option>
                    }) }
                </select>
                <input type="date" placeholder="From" value={(*date_from).clone()} oninput={bind_text(&date_from)} />
                <input type="date" placeholder="To" value={(*date_to).clone()} oninput={bind_text(&date_to)} />
                <input type="number" min="0" placeholder="Min. laps" value={(*laps_min).clone()} oninput={bind_text(&laps_min)} />
                <input type="number" min="0" placeholder="Max. laps" value={(*laps_max).clone()} oninput={bind_text(&laps_max)} />
                <label class="checkbox-group">
                    <input type="checkbox" checked={*real_only} onchange={on_real} />
                    { "Official races only" }
                </label>
                <button type="submit" class="btn-primary">{ "Apply" }</button>
                <button type="button" class="btn-secondary" onclick={onreset}>{ "Reset" }</button>
            </form>
            if let Some(err) = &*filter_error {
                <div class="input-error">{ err }</div>
            }

            {
                match &list {
                    FetchState::Loading => render_loading("races"),
                    FetchState::Failed(e) => render_error(e),
                    FetchState::Ready(page) if page.races.is_empty() => render_empty("No races found."),
                    FetchState::Ready(page) => html! {
                        <>
                            <div class="card-grid">
                                { page.races.iter().map(|r| render_card(r, on_open.clone())).collect::<Html>() }
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
                <RaceDetailPanel {id} {on_close} />
            }
        </div>
    }
}
