use crate::components::{render_error, render_stat, DropdownItem, SearchDropdown};
use crate::config::{api_client, YEAR_DEBOUNCE_MS};
use crate::hooks::{use_remote, FetchState};
use crate::utils::{debounce_callback, input_value, scroll_into_view, select_value};
use f1_stats::compare::{CompareState, Metric, Side, SideSelection};
use f1_stats::format::{check_mark, gained, number, one_decimal, or_dash, position};
use f1_stats::models::{Comparison, DriverComparison};
use f1_stats::ApiClient;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

const RESULTS_ID: &str = "comparison-results";

type Shared = Rc<RefCell<CompareState>>;

/// Validates the typed year, then loads the race's constructors.
fn validate_year(state: Shared, redraw: UseForceUpdateHandle, api: ApiClient, side: Side, year: u16) {
    let lookup = match state.borrow_mut().begin_year_validation(side, year) {
        Ok(lookup) => lookup,
        Err(e) => {
            warn!("{} side: {}", side.key(), e);
            redraw.force_update();
            return;
        }
    };
    redraw.force_update();

    spawn_local(async move {
        let next = match api.validate_race(&lookup.circuit_id, lookup.year).await {
            Ok(race) => state.borrow_mut().race_validated(&lookup, race),
            Err(e) => {
                warn!("race validation failed: {}", e);
                state.borrow_mut().race_validation_failed(&lookup);
                None
            }
        };
        redraw.force_update();

        let Some(next) = next else { return };
        let constructors = match api.constructors_by_race(next.race_id).await {
            Ok(list) => list,
            Err(e) => {
                warn!("constructors for race {} failed: {}", next.race_id, e);
                Vec::new()
            }
        };
        state.borrow_mut().constructors_loaded(&next, constructors);
        redraw.force_update();
    });
}

fn load_drivers(state: Shared, redraw: UseForceUpdateHandle, api: ApiClient, side: Side, constructor_id: String) {
    let lookup = state.borrow_mut().select_constructor(side, &constructor_id);
    redraw.force_update();
    let Some(lookup) = lookup else { return };

    spawn_local(async move {
        let drivers = match api
            .drivers_by_race_constructor(lookup.race_id, &lookup.constructor_id)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                warn!("drivers for {} failed: {}", lookup.constructor_id, e);
                Vec::new()
            }
        };
        state.borrow_mut().drivers_loaded(&lookup, drivers);
        redraw.force_update();
    });
}

struct SideHandlers {
    on_year: Callback<InputEvent>,
    on_constructor_query: Callback<String>,
    on_constructor: Callback<String>,
    on_driver: Callback<Event>,
}

fn render_side(side: Side, selection: &SideSelection, handlers: SideHandlers) -> Html {
    let constructor_items: Vec<DropdownItem> = selection
        .visible_constructors()
        .into_iter()
        .map(|c| DropdownItem {
            id: c.id.clone(),
            label: c.name.clone(),
            detail: (c.full_name != c.name && !c.full_name.is_empty()).then(|| c.full_name.clone()),
        })
        .collect();
    let selected_driver = selection.driver.as_ref().map(|d| d.id.clone()).unwrap_or_default();
    let summary = selection.summary();

    html! {
        <div class={classes!("driver-selection", side.key())}>
            <h2>{ side.title() }</h2>

            <div class="form-group">
                <label for={format!("year-{}", side.key())}>{ "Year" }</label>
                <input
                    type="text"
                    id={format!("year-{}", side.key())}
                    maxlength="4"
                    placeholder="e.g. 2021"
                    value={selection.year_text.clone()}
                    oninput={handlers.on_year}
                />
                if selection.validating {
                    <div class="input-status">{ "Checking race..." }</div>
                }
                if let Some(err) = &selection.error {
                    <div class="input-error">{ err.to_string() }</div>
                }
                if let Some(race) = &selection.race {
                    <div class="race-info">
                        <div class="race-name">{ or_dash(race.official_name.as_deref()) }</div>
                        <div class="race-details">{ race.details() }</div>
                    </div>
                }
            </div>

            if selection.constructors_loaded {
                <div class="form-group">
                    <label>{ "Constructor" }</label>
                    <SearchDropdown
                        id={format!("constructor-{}", side.key())}
                        query={selection.constructor_query.clone()}
                        placeholder="Search constructor..."
                        items={constructor_items}
                        on_query={handlers.on_constructor_query}
                        on_select={handlers.on_constructor}
                        empty_text="No constructors found"
                    />
                </div>
            }

            if selection.drivers_loaded {
                <div class="form-group">
                    <label for={format!("driver-{}", side.key())}>{ "Driver" }</label>
                    <select id={format!("driver-{}", side.key())} onchange={handlers.on_driver}>
                        <option value="" selected={selected_driver.is_empty()}>{ "Select driver" }</option>
                        { for selection.drivers.iter().map(|d| html! {
                            <option value={d.id.clone()} selected={d.id == selected_driver}>{ d.label() }</option>
                        }) }
                    </select>
                </div>
            }

            if selection.show_summary() {
                <div class="selection-summary">
                    { render_stat("Year", summary.year) }
                    { render_stat("Constructor", summary.constructor) }
                    { render_stat("Driver", summary.driver) }
                </div>
            }
        </div>
    }
}

/// One comparison row; `metric` marks the better value.
fn metric_row(
    label: &str,
    comparison: &Comparison,
    metric: Option<Metric>,
    value: impl Fn(&DriverComparison) -> String,
) -> Html {
    let cell = |side: Side| {
        let text = comparison.driver(side).map(&value).unwrap_or_else(|| "-".to_string());
        let winner = metric.is_some_and(|m| comparison.wins(m, side));
        html! { <td class={classes!("stat-value", winner.then_some("winner"))}>{ text }</td> }
    };
    html! {
        <tr>
            <td class="stat-label">{ label }</td>
            { cell(Side::Left) }
            { cell(Side::Right) }
        </tr>
    }
}

fn render_section(title: &str, rows: Html) -> Html {
    html! {
        <tbody class="comparison-section">
            <tr class="section-title"><th colspan="3">{ title }</th></tr>
            { rows }
        </tbody>
    }
}

fn render_comparison(c: &Comparison) -> Html {
    let name = |side: Side| {
        c.driver(side)
            .and_then(|d| d.info.name.clone())
            .unwrap_or_else(|| side.title().to_string())
    };
    let circuit = c.circuit.clone().unwrap_or_default();

    html! {
        <div class="comparison-results" id={RESULTS_ID}>
            <div class="circuit-header">
                <h2>{ or_dash(circuit.name.as_deref()) }</h2>
                <div class="circuit-details">{ circuit.details() }</div>
            </div>
            <table class="comparison-table">
                <thead>
                    <tr><th></th><th>{ name(Side::Left) }</th><th>{ name(Side::Right) }</th></tr>
                </thead>
                { render_section("Driver", html! {
                    <>
                        { metric_row("Number", c, None, |d| or_dash(d.info.number.as_deref())) }
                        { metric_row("Nationality", c, None, |d| or_dash(d.info.nationality.as_deref())) }
                        { metric_row("Constructor", c, None, |d| or_dash(d.info.constructor.as_deref())) }
                    </>
                }) }
                { render_section("Race Performance", html! {
                    <>
                        { metric_row("Finish", c, Some(Metric::FinishPosition), |d| position(d.race_performance.finish_position)) }
                        { metric_row("Grid", c, Some(Metric::GridPosition), |d| position(d.race_performance.grid_position)) }
                        { metric_row("Qualifying", c, None, |d| position(d.race_performance.qualifying_position)) }
                        { metric_row("Points", c, Some(Metric::Points), |d| number(d.race_performance.points)) }
                        { metric_row("Positions Gained", c, None, |d| gained(d.race_performance.positions_gained)) }
                        { metric_row("Pole", c, None, |d| check_mark(d.race_performance.pole).to_string()) }
                    </>
                }) }
                { render_section("Circuit History", html! {
                    <>
                        { metric_row("Races", c, None, |d| or_dash(d.circuit_history.total_races)) }
                        { metric_row("Wins", c, Some(Metric::CircuitWins), |d| or_dash(d.circuit_history.wins)) }
                        { metric_row("Podiums", c, Some(Metric::CircuitPodiums), |d| or_dash(d.circuit_history.podiums)) }
                        { metric_row("Poles", c, None, |d| or_dash(d.circuit_history.poles)) }
                        { metric_row("Avg. Finish", c, Some(Metric::CircuitAvgFinish), |d| one_decimal(d.circuit_history.avg_finish)) }
                        { metric_row("Best Finish", c, None, |d| position(d.circuit_history.best_finish)) }
                        { metric_row("Avg. Points", c, None, |d| one_decimal(d.circuit_history.avg_points)) }
                        { metric_row("Total Points", c, None, |d| number(d.circuit_history.total_points)) }
                    </>
                }) }
                { render_section("Season", html! {
                    <>
                        { metric_row("Championship", c, Some(Metric::ChampionshipPosition), |d| position(d.season_stats.championship_position)) }
                        { metric_row("Points", c, Some(Metric::SeasonPoints), |d| number(d.season_stats.season_points)) }
                        { metric_row("Wins", c, None, |d| or_dash(d.season_stats.season_wins)) }
                        { metric_row("Podiums", c, None, |d| or_dash(d.season_stats.season_podiums)) }
                    </>
                }) }
            </table>
        </div>
    }
}

#[function_component(ComparePage)]
pub fn compare_page() -> Html {
    let state: Shared = use_mut_ref(CompareState::new);
    let redraw = use_force_update();
    let circuit_query = use_state(String::new);
    let left_timer = use_state(|| None::<Timeout>);
    let right_timer = use_state(|| None::<Timeout>);
    let comparing = use_state(|| false);
    let result = use_state(|| None::<Result<Comparison, String>>);

    let api = api_client();
    let circuits = {
        let api = api.clone();
        use_remote((), move |_| async move { api.circuits().await })
    };

    {
        use_effect_with((*result).clone(), move |result| {
            if matches!(result, Some(Ok(_))) {
                scroll_into_view(RESULTS_ID);
            }
            || ()
        });
    }

    let circuit_items: Vec<DropdownItem> = circuits
        .ready()
        .map(|list| {
            list.iter()
                .filter(|c| c.matches(&circuit_query))
                .map(|c| DropdownItem {
                    id: c.id.clone(),
                    label: c.full_name.clone(),
                    detail: Some(c.country_name.clone()),
                })
                .collect()
        })
        .unwrap_or_default();
    let circuit_status: Option<AttrValue> = match &circuits {
        FetchState::Loading => Some("Loading circuits...".into()),
        FetchState::Failed(_) => Some("Error loading".into()),
        FetchState::Ready(_) => None,
    };

    let on_circuit_query = {
        let circuit_query = circuit_query.clone();
        Callback::from(move |q: String| circuit_query.set(q))
    };
    let on_circuit = {
        let state = state.clone();
        let redraw = redraw.clone();
        let circuit_query = circuit_query.clone();
        let timers = [left_timer.clone(), right_timer.clone()];
        let list = circuits.ready().cloned().unwrap_or_default();
        Callback::from(move |id: String| {
            let Some(circuit) = list.iter().find(|c| c.id == id) else { return };
            for timer in &timers {
                timer.set(None);
            }
            circuit_query.set(circuit.label());
            state.borrow_mut().select_circuit(circuit.clone());
            redraw.force_update();
        })
    };

    let handlers = |side: Side, timer: UseStateHandle<Option<Timeout>>| {
        let on_year = {
            let state = state.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            Callback::from(move |e: InputEvent| {
                let text = input_value(&e);
                let candidate = state.borrow_mut().input_year(side, &text);
                redraw.force_update();
                match candidate {
                    Some(year) => {
                        let state = state.clone();
                        let redraw = redraw.clone();
                        let api = api.clone();
                        let validate = Callback::from(move |year: u16| {
                            validate_year(state.clone(), redraw.clone(), api.clone(), side, year)
                        });
                        debounce_callback(&timer, validate, year, YEAR_DEBOUNCE_MS);
                    }
                    None => timer.set(None),
                }
            })
        };
        let on_constructor_query = {
            let state = state.clone();
            let redraw = redraw.clone();
            Callback::from(move |q: String| {
                state.borrow_mut().input_constructor_query(side, &q);
                redraw.force_update();
            })
        };
        let on_constructor = {
            let state = state.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            Callback::from(move |id: String| {
                load_drivers(state.clone(), redraw.clone(), api.clone(), side, id)
            })
        };
        let on_driver = {
            let state = state.clone();
            let redraw = redraw.clone();
            Callback::from(move |e: Event| {
                state.borrow_mut().select_driver(side, &select_value(&e));
                redraw.force_update();
            })
        };
        SideHandlers {
            on_year,
            on_constructor_query,
            on_constructor,
            on_driver,
        }
    };

    let on_compare = {
        let state = state.clone();
        let comparing = comparing.clone();
        let result = result.clone();
        let api = api.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = state.borrow().comparison_request() else { return };
            info!(
                "comparing {} (race {}) with {} (race {})",
                request.driver_1_id, request.race_1_id, request.driver_2_id, request.race_2_id
            );
            comparing.set(true);
            let comparing = comparing.clone();
            let result = result.clone();
            let api = api.clone();
            spawn_local(async move {
                let answer = api.compare_drivers(&request).await.map_err(|e| {
                    warn!("comparison failed: {}", e);
                    e.to_string()
                });
                comparing.set(false);
                result.set(Some(answer));
            });
        })
    };

    let snapshot = state.borrow().clone();
    let ready = snapshot.is_ready() && !*comparing;

    html! {
        <div class="page compare-page">
            <h1>{ "Compare Drivers" }</h1>

            <div class="form-group circuit-select">
                <label for="circuit-search">{ "Circuit" }</label>
                <SearchDropdown
                    id="circuit-search"
                    query={(*circuit_query).clone()}
                    placeholder="Search circuit or country..."
                    items={circuit_items}
                    on_query={on_circuit_query}
                    on_select={on_circuit}
                    status={circuit_status}
                />
            </div>

            if snapshot.years_visible() {
                <div class="selection-grid">
                    { render_side(Side::Left, &snapshot.left, handlers(Side::Left, left_timer.clone())) }
                    { render_side(Side::Right, &snapshot.right, handlers(Side::Right, right_timer.clone())) }
                </div>
            }

            <button class="btn-primary compare-btn" disabled={!ready} onclick={on_compare}>
                { if *comparing { "Comparing..." } else { "Compare" } }
            </button>

            {
                match &*result {
                    Some(Ok(comparison)) => render_comparison(comparison),
                    Some(Err(e)) => render_error(&format!("Comparison failed: {}", e)),
                    None => html! {},
                }
            }
        </div>
    }
}
