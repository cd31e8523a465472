use crate::components::{render_empty, render_error, render_loading, PaginationBar};
use crate::config::{api_client, QUALIFYING_FORMATS};
use crate::hooks::{use_remote, FetchState};
use crate::utils::{bind_text, select_value};
use f1_stats::api::StatsPage;
use f1_stats::filters::StatsFilters;
use f1_stats::format::{badge_kind, fixed_or_dash, or_dash, prettify, DASH};
use f1_stats::models::YearStats;
use yew::prelude::*;

/// Count cell for one qualifying-format column; missing counts get no badge.
fn count_badge(value: Option<i64>, badge: &str) -> Html {
    match value {
        Some(count) => html! {
            <span class={classes!("badge", format!("badge-{}", badge_kind(count, badge)))}>
                { count }
            </span>
        },
        None => html! { { DASH } },
    }
}

fn render_row(row: &YearStats) -> Html {
    html! {
        <tr>
            <td class="col-year">{ or_dash(row.year) }</td>
            <td class="col-highlight col-number">{ or_dash(row.race_count) }</td>
            <td class="col-number">{ fixed_or_dash(row.avg_laps, 3) }</td>
            <td class="col-badge">{ count_badge(row.sprint_races, "sprint") }</td>
            <td class="col-badge">{ count_badge(row.knockout_races, "knockout") }</td>
            <td class="col-badge">{ count_badge(row.one_session_races, "default") }</td>
            <td class="col-badge">{ count_badge(row.two_session_races, "default") }</td>
            <td class="col-badge">{ count_badge(row.four_laps_races, "default") }</td>
            <td class="col-badge">{ count_badge(row.aggregate_races, "default") }</td>
        </tr>
    }
}

#[function_component(RaceStatsPage)]
pub fn race_stats_page() -> Html {
    let year_from = use_state(String::new);
    let year_to = use_state(String::new);
    let qualifying_format = use_state(String::new);
    let applied = use_state(|| (StatsFilters::default(), 1u32));
    let filter_error = use_state(|| None::<String>);

    let api = api_client();
    let stats: FetchState<StatsPage> = use_remote((*applied).clone(), move |(filters, page)| async move {
        api.race_stats(&filters, page).await
    });

    let onsubmit = {
        let year_from = year_from.clone();
        let year_to = year_to.clone();
        let qualifying_format = qualifying_format.clone();
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filters = StatsFilters {
                year_from: (*year_from).clone(),
                year_to: (*year_to).clone(),
                qualifying_format: (*qualifying_format).clone(),
            };
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
        let year_from = year_from.clone();
        let year_to = year_to.clone();
        let qualifying_format = qualifying_format.clone();
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |_: MouseEvent| {
            year_from.set(String::new());
            year_to.set(String::new());
            qualifying_format.set(String::new());
            filter_error.set(None);
            applied.set((StatsFilters::default(), 1));
        })
    };
    let on_format = {
        let qualifying_format = qualifying_format.clone();
        Callback::from(move |e: Event| qualifying_format.set(select_value(&e)))
    };
    let on_page = {
        let applied = applied.clone();
        Callback::from(move |page: u32| applied.set((applied.0.clone(), page)))
    };

    html! {
        <div class="page race-stats-page">
            <h1>{ "Race Statistics" }</h1>
            <form class="filters" {onsubmit}>
                <input type="text" placeholder="Year from" maxlength="4" value={(*year_from).clone()} oninput={bind_text(&year_from)} />
                <input type="text" placeholder="Year to" maxlength="4" value={(*year_to).clone()} oninput={bind_text(&year_to)} />
                <select onchange={on_format}>
                    <option value="" selected={qualifying_format.is_empty()}>{ "Any qualifying format" }</option>
                    { for QUALIFYING_FORMATS.iter().map(|f| html! {
                        <option value={*f} selected={*qualifying_format == *f}>{ prettify(Some(*f)) }</option>
                    }) }
                </select>
                <button type="submit" class="btn-primary">{ "Apply" }</button>
                <button type="button" class="btn-secondary" onclick={onreset}>{ "Reset" }</button>
            </form>
            if let Some(err) = &*filter_error {
                <div class="input-error">{ err }</div>
            }

            {
                match &stats {
                    FetchState::Loading => render_loading("statistics"),
                    FetchState::Failed(e) => render_error(e),
                    FetchState::Ready(page) if page.data.is_empty() => render_empty("No statistics for these filters."),
                    FetchState::Ready(page) => html! {
                        <>
                            <div class="table-container">
                                <table class="stats-table">
                                    <thead>
                                        <tr>
                                            <th>{ "Year" }</th>
                                            <th>{ "Races" }</th>
                                            <th>{ "Avg. Laps" }</th>
                                            <th>{ "Sprint" }</th>
                                            <th>{ "Knockout" }</th>
                                            <th>{ "One Session" }</th>
                                            <th>{ "Two Session" }</th>
                                            <th>{ "Four Laps" }</th>
                                            <th>{ "Aggregate" }</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { page.data.iter().map(render_row).collect::<Html>() }
                                    </tbody>
                                </table>
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
        </div>
    }
}
