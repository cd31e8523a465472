use crate::components::{render_error, render_loading};
use crate::config::{api_client, QUALIFYING_FORMATS, SEARCH_DEBOUNCE_MS};
use crate::hooks::{use_debounced_text, use_remote, FetchState};
use crate::utils::{input_value, select_value};
use f1_stats::draft::{
    BlockAction, ConstructorForm, DriverForm, ExistingConstructor, ExistingDriver, ExistingRace,
    Mode, RaceForm, Saved, SavedConstructor, SavedData, SavedDriver, SavedKind, SavedRace, Step,
    SummaryBlock,
};
use f1_stats::filters::{ConstructorFilters, DriverFilters, RaceFilters};
use f1_stats::format::{bullet_join, or_dash, prettify};
use f1_stats::{ApiError, FormError};
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// A search hit in the existing-record picker.
#[derive(Clone, PartialEq)]
struct Hit {
    id: String,
    label: String,
    detail: String,
}

/// First page of one list endpoint; a blank query sends no name filter.
async fn search(kind: SavedKind, query: String) -> Result<Vec<Hit>, ApiError> {
    let api = api_client();
    let hits = match kind {
        SavedKind::Constructor => {
            let filters = ConstructorFilters {
                name: query,
                ..Default::default()
            };
            api.list_constructors(&filters, 1)
                .await?
                .constructors
                .iter()
                .map(|c| Hit {
                    id: c.id.clone(),
                    label: c.display_name().to_string(),
                    detail: or_dash(c.nationality.as_deref()),
                })
                .collect()
        }
        SavedKind::Driver => {
            let filters = DriverFilters {
                name: query,
                ..Default::default()
            };
            api.list_drivers(&filters, 1)
                .await?
                .drivers
                .iter()
                .map(|d| Hit {
                    id: d.id.clone(),
                    label: d.display_name().to_string(),
                    detail: bullet_join([d.nationality.as_deref(), d.abbreviation.as_deref()]),
                })
                .collect()
        }
        SavedKind::Race => {
            let filters = RaceFilters {
                official_name: query,
                ..Default::default()
            };
            api.list_races(&filters, 1)
                .await?
                .races
                .iter()
                .filter_map(|r| {
                    Some(Hit {
                        id: r.id?.to_string(),
                        label: r.title(),
                        detail: format!("{} • Round {}", or_dash(r.year), or_dash(r.round)),
                    })
                })
                .collect()
        }
    };
    Ok(hits)
}

#[derive(Properties, PartialEq)]
struct ExistingPickerProps {
    kind: SavedKind,
    on_pick: Callback<(String, String)>,
}

/// Debounced typeahead over one list endpoint; emits `(id, label)`.
#[function_component(ExistingPicker)]
fn existing_picker(props: &ExistingPickerProps) -> Html {
    let query = use_debounced_text(SEARCH_DEBOUNCE_MS);
    let kind = props.kind;
    let hits = use_remote(query.committed.clone(), move |q: String| search(kind, q));

    let list = match &hits {
        FetchState::Loading => html! { <div class="dropdown-item no-results">{ "Searching..." }</div> },
        FetchState::Failed(_) => html! { <div class="dropdown-item no-results">{ "Error loading" }</div> },
        FetchState::Ready(hits) if hits.is_empty() => {
            html! { <div class="dropdown-item no-results">{ "No results" }</div> }
        }
        FetchState::Ready(hits) => hits
            .iter()
            .map(|hit| {
                let on_pick = props.on_pick.clone();
                let picked = (hit.id.clone(), hit.label.clone());
                let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(picked.clone()));
                html! {
                    <div class="dropdown-item" {onclick}>
                        <div class="item-name">{ &hit.label }</div>
                        <div class="item-detail">{ &hit.detail }</div>
                    </div>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class="searchable-dropdown">
            <input
                type="text"
                autocomplete="off"
                placeholder={format!("Search {}s...", kind.noun())}
                value={query.text.clone()}
                oninput={query.oninput}
            />
            <div class="dropdown-list open">{ list }</div>
        </div>
    }
}

/// Labelled text input bound to one field of a form held in state.
fn field<F: Clone + 'static>(
    form: &UseStateHandle<F>,
    label: &str,
    input_type: &'static str,
    value: &str,
    set: fn(&mut F, String),
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            set(&mut next, input_value(&e));
            form.set(next);
        })
    };
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <input type={input_type} value={value.to_string()} {oninput} />
        </div>
    }
}

fn render_mode_toggle(mode: &UseStateHandle<Mode>) -> Html {
    let button = |target: Mode, text: &str| {
        let mode = mode.clone();
        let active = *mode == target;
        let onclick = Callback::from(move |_: MouseEvent| mode.set(target));
        html! {
            <button type="button" class={classes!("mode-btn", active.then_some("active"))} {onclick}>
                { text.to_string() }
            </button>
        }
    };
    html! {
        <div class="mode-toggle">
            { button(Mode::Custom, "Create new") }
            { button(Mode::Existing, "Use existing") }
        </div>
    }
}

fn render_section_status(error: &Option<String>, picked: &Option<(String, String)>) -> Html {
    html! {
        <>
            if let Some((_, label)) = picked {
                <div class="picked">{ format!("Selected: {}", label) }</div>
            }
            if let Some(err) = error {
                <div class="input-error">{ err }</div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps<T: PartialEq> {
    on_save: Callback<T>,
    #[prop_or_default]
    disabled: bool,
}

#[function_component(ConstructorSection)]
fn constructor_section(props: &SectionProps<SavedConstructor>) -> Html {
    let mode = use_state(Mode::default);
    let form = use_state(ConstructorForm::default);
    let picked = use_state(|| None::<(String, String)>);
    let error = use_state(|| None::<String>);

    let on_pick = {
        let picked = picked.clone();
        Callback::from(move |hit: (String, String)| picked.set(Some(hit)))
    };
    let on_save = {
        let (mode, form, picked, error) = (mode.clone(), form.clone(), picked.clone(), error.clone());
        let save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| match *mode {
            Mode::Custom => match form.parse() {
                Ok(c) => {
                    error.set(None);
                    save.emit(Saved::Custom(c));
                }
                Err(e) => error.set(Some(e.to_string())),
            },
            Mode::Existing => {
                let Some((id, _)) = (*picked).clone() else {
                    error.set(Some(FormError::NoSelection(SavedKind::Constructor).to_string()));
                    return;
                };
                let (save, error) = (save.clone(), error.clone());
                spawn_local(async move {
                    match api_client().constructor(&id).await {
                        Ok(c) => {
                            error.set(None);
                            save.emit(Saved::Existing(ExistingConstructor::from(&c)));
                        }
                        Err(e) => error.set(Some(format!("Failed to load constructor: {}", e))),
                    }
                });
            }
        })
    };

    html! {
        <section class="data-section">
            <h2>{ "Constructor" }</h2>
            { render_mode_toggle(&mode) }
            if *mode == Mode::Custom {
                <div class="form-grid">
                    { field(&form, "Name", "text", &form.name, |f, v| f.name = v) }
                    { field(&form, "Country ID", "text", &form.country_id, |f, v| f.country_id = v) }
                    { field(&form, "Best championship position", "text", &form.best_championship_position, |f, v| f.best_championship_position = v) }
                    { field(&form, "Championship wins", "number", &form.total_championship_wins, |f, v| f.total_championship_wins = v) }
                    { field(&form, "Race starts", "number", &form.total_race_starts, |f, v| f.total_race_starts = v) }
                    { field(&form, "Podiums", "number", &form.total_podiums, |f, v| f.total_podiums = v) }
                    { field(&form, "Points", "number", &form.total_points, |f, v| f.total_points = v) }
                    { field(&form, "Pole positions", "number", &form.total_pole_positions, |f, v| f.total_pole_positions = v) }
                </div>
            } else {
                <ExistingPicker kind={SavedKind::Constructor} {on_pick} />
            }
            { render_section_status(&error, &picked) }
            <button type="button" class="btn-secondary" disabled={props.disabled} onclick={on_save}>{ "Save Constructor" }</button>
        </section>
    }
}

#[function_component(DriverSection)]
fn driver_section(props: &SectionProps<SavedDriver>) -> Html {
    let mode = use_state(Mode::default);
    let form = use_state(DriverForm::default);
    let picked = use_state(|| None::<(String, String)>);
    let error = use_state(|| None::<String>);

    let on_pick = {
        let picked = picked.clone();
        Callback::from(move |hit: (String, String)| picked.set(Some(hit)))
    };
    let on_save = {
        let (mode, form, picked, error) = (mode.clone(), form.clone(), picked.clone(), error.clone());
        let save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| match *mode {
            Mode::Custom => match form.parse() {
                Ok(d) => {
                    error.set(None);
                    save.emit(Saved::Custom(d));
                }
                Err(e) => error.set(Some(e.to_string())),
            },
            Mode::Existing => {
                let Some((id, _)) = (*picked).clone() else {
                    error.set(Some(FormError::NoSelection(SavedKind::Driver).to_string()));
                    return;
                };
                let (save, error) = (save.clone(), error.clone());
                spawn_local(async move {
                    match api_client().driver(&id).await {
                        Ok(d) => {
                            error.set(None);
                            save.emit(Saved::Existing(ExistingDriver::from(&d)));
                        }
                        Err(e) => error.set(Some(format!("Failed to load driver: {}", e))),
                    }
                });
            }
        })
    };

    html! {
        <section class="data-section">
            <h2>{ "Driver" }</h2>
            { render_mode_toggle(&mode) }
            if *mode == Mode::Custom {
                <div class="form-grid">
                    { field(&form, "Name", "text", &form.name, |f, v| f.name = v) }
                    { field(&form, "Abbreviation", "text", &form.abbreviation, |f, v| f.abbreviation = v) }
                    { field(&form, "Permanent number", "number", &form.permanent_number, |f, v| f.permanent_number = v) }
                    { field(&form, "Gender", "text", &form.gender, |f, v| f.gender = v) }
                    { field(&form, "Date of birth", "date", &form.date_of_birth, |f, v| f.date_of_birth = v) }
                    { field(&form, "Place of birth", "text", &form.place_of_birth, |f, v| f.place_of_birth = v) }
                    { field(&form, "Country of birth ID", "text", &form.country_of_birth_country_id, |f, v| f.country_of_birth_country_id = v) }
                    { field(&form, "Nationality country ID", "text", &form.nationality_country_id, |f, v| f.nationality_country_id = v) }
                    { field(&form, "Best championship position", "text", &form.best_championship_position, |f, v| f.best_championship_position = v) }
                    { field(&form, "Best race result", "text", &form.best_race_result, |f, v| f.best_race_result = v) }
                    { field(&form, "Championship wins", "number", &form.total_championship_wins, |f, v| f.total_championship_wins = v) }
                    { field(&form, "Race starts", "number", &form.total_race_starts, |f, v| f.total_race_starts = v) }
                    { field(&form, "Race wins", "number", &form.total_race_wins, |f, v| f.total_race_wins = v) }
                    { field(&form, "Race laps", "number", &form.total_race_laps, |f, v| f.total_race_laps = v) }
                    { field(&form, "Podiums", "number", &form.total_podiums, |f, v| f.total_podiums = v) }
                    { field(&form, "Points", "number", &form.total_points, |f, v| f.total_points = v) }
                    { field(&form, "Pole positions", "number", &form.total_pole_positions, |f, v| f.total_pole_positions = v) }
                </div>
            } else {
                <ExistingPicker kind={SavedKind::Driver} {on_pick} />
            }
            { render_section_status(&error, &picked) }
            <button type="button" class="btn-secondary" disabled={props.disabled} onclick={on_save}>{ "Save Driver" }</button>
        </section>
    }
}

#[function_component(RaceSection)]
fn race_section(props: &SectionProps<SavedRace>) -> Html {
    let mode = use_state(Mode::default);
    let form = use_state(RaceForm::default);
    let picked = use_state(|| None::<(String, String)>);
    let error = use_state(|| None::<String>);

    let on_pick = {
        let picked = picked.clone();
        Callback::from(move |hit: (String, String)| picked.set(Some(hit)))
    };
    let on_format = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.qualifying_format = select_value(&e);
            form.set(next);
        })
    };
    let on_save = {
        let (mode, form, picked, error) = (mode.clone(), form.clone(), picked.clone(), error.clone());
        let save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| match *mode {
            Mode::Custom => match form.parse() {
                Ok(r) => {
                    error.set(None);
                    save.emit(Saved::Custom(r));
                }
                Err(e) => error.set(Some(e.to_string())),
            },
            Mode::Existing => {
                let Some((id, _)) = (*picked).clone() else {
                    error.set(Some(FormError::NoSelection(SavedKind::Race).to_string()));
                    return;
                };
                let (save, error) = (save.clone(), error.clone());
                spawn_local(async move {
                    match api_client().race(&id).await {
                        Ok(r) => {
                            error.set(None);
                            save.emit(Saved::Existing(ExistingRace::from(&r)));
                        }
                        Err(e) => error.set(Some(format!("Failed to load race: {}", e))),
                    }
                });
            }
        })
    };

    html! {
        <section class="data-section">
            <h2>{ "Race" }</h2>
            { render_mode_toggle(&mode) }
            if *mode == Mode::Custom {
                <div class="form-grid">
                    { field(&form, "Circuit ID", "text", &form.circuit_id, |f, v| f.circuit_id = v) }
                    { field(&form, "Official name", "text", &form.official_name, |f, v| f.official_name = v) }
                    { field(&form, "Year", "text", &form.year, |f, v| f.year = v) }
                    { field(&form, "Round", "number", &form.round, |f, v| f.round = v) }
                    { field(&form, "Date", "date", &form.date, |f, v| f.date = v) }
                    <div class="form-group">
                        <label>{ "Qualifying format" }</label>
                        <select onchange={on_format}>
                            <option value="" selected={form.qualifying_format.is_empty()}>{ "Select format" }</option>
                            { for QUALIFYING_FORMATS.iter().map(|f| html! {
                                <option value={*f} selected={form.qualifying_format == *f}>{ prettify(Some(*f)) }</option>
                            }) }
                        </select>
                    </div>
                    { field(&form, "Laps", "number", &form.laps, |f, v| f.laps = v) }
                    { field(&form, "Qualifying date", "date", &form.qualifying_date, |f, v| f.qualifying_date = v) }
                </div>
            } else {
                <ExistingPicker kind={SavedKind::Race} {on_pick} />
            }
            { render_section_status(&error, &picked) }
            <button type="button" class="btn-secondary" disabled={props.disabled} onclick={on_save}>{ "Save Race" }</button>
        </section>
    }
}

fn render_block(block: &SummaryBlock, disabled: bool, on_action: Callback<(SavedKind, BlockAction)>) -> Html {
    let (kind, action) = (block.kind, block.action);
    let onclick = Callback::from(move |_: MouseEvent| on_action.emit((kind, action)));
    let label = match action {
        BlockAction::Remove => "Remove",
        BlockAction::DeleteFromDb => "Delete from DB",
    };
    html! {
        <div class="summary-block">
            <div class="summary-header">
                <h3>{ &block.title }</h3>
                <button
                    type="button"
                    class={classes!("btn-small", (action == BlockAction::DeleteFromDb).then_some("danger"))}
                    {disabled}
                    {onclick}
                >
                    { label }
                </button>
            </div>
            { for block.rows.iter().map(|(k, v)| html! {
                <div class="summary-row"><span class="key">{ *k }</span><span class="value">{ v }</span></div>
            }) }
        </div>
    }
}

/// Posts the custom entries in order; stops at the first failure.
///
/// Created ids go straight into the live draft, so a slot cleared meanwhile
/// stays cleared.
async fn submit(steps: Vec<Step>, saved: Rc<RefCell<SavedData>>) -> (Vec<String>, Option<String>) {
    let api = api_client();
    let mut done = Vec::new();
    for step in steps {
        let created = match &step {
            Step::AddConstructor(c) => api.add_constructor(c).await.map(Some),
            Step::AddDriver(d) => api.add_driver(d).await.map(Some),
            Step::AddRace(r) => api.add_race(r).await.map(Some),
            Step::KeepExisting(_) => Ok(None),
        };
        match created {
            Ok(id) => {
                if let Some(id) = id {
                    info!("created {} {}", step.kind().noun(), id);
                    saved.borrow_mut().record_created(step.kind(), id);
                }
                done.push(step.done_message());
            }
            Err(e) => {
                warn!("adding {} failed: {}", step.kind().noun(), e);
                let failure = format!("Failed to add {}: {}", step.kind().noun(), e);
                return (done, Some(failure));
            }
        }
    }
    (done, None)
}

#[function_component(AddDataPage)]
pub fn add_data_page() -> Html {
    let saved = use_mut_ref(SavedData::default);
    let redraw = use_force_update();
    let submitting = use_state(|| false);
    let messages = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);

    let on_constructor = {
        let saved = saved.clone();
        let redraw = redraw.clone();
        Callback::from(move |entry: SavedConstructor| {
            saved.borrow_mut().constructor = Some(entry);
            redraw.force_update();
        })
    };
    let on_driver = {
        let saved = saved.clone();
        let redraw = redraw.clone();
        Callback::from(move |entry: SavedDriver| {
            saved.borrow_mut().driver = Some(entry);
            redraw.force_update();
        })
    };
    let on_race = {
        let saved = saved.clone();
        let redraw = redraw.clone();
        Callback::from(move |entry: SavedRace| {
            saved.borrow_mut().race = Some(entry);
            redraw.force_update();
        })
    };

    let on_action = {
        let saved = saved.clone();
        let redraw = redraw.clone();
        let messages = messages.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |(kind, action): (SavedKind, BlockAction)| match action {
            _ if *submitting => {}
            BlockAction::Remove => {
                saved.borrow_mut().remove(kind);
                redraw.force_update();
            }
            BlockAction::DeleteFromDb => {
                let Some(id) = saved.borrow().deletable_driver().map(str::to_string) else {
                    return;
                };
                let (saved, redraw, messages, error) =
                    (saved.clone(), redraw.clone(), messages.clone(), error.clone());
                spawn_local(async move {
                    match api_client().delete_driver(&id).await {
                        Ok(()) => {
                            info!("deleted driver {}", id);
                            saved.borrow_mut().remove(SavedKind::Driver);
                            error.set(None);
                            messages.set(vec!["Driver deleted from database.".to_string()]);
                        }
                        Err(e) => error.set(Some(format!("Failed to delete driver: {}", e))),
                    }
                    redraw.force_update();
                });
            }
        })
    };

    let on_submit = {
        let saved = saved.clone();
        let redraw = redraw.clone();
        let submitting = submitting.clone();
        let messages = messages.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let steps = match saved.borrow().submission_steps() {
                Ok(steps) => steps,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            submitting.set(true);
            error.set(None);
            messages.set(Vec::new());
            let (saved, redraw, submitting, messages, error) = (
                saved.clone(),
                redraw.clone(),
                submitting.clone(),
                messages.clone(),
                error.clone(),
            );
            spawn_local(async move {
                let (done, failure) = submit(steps, saved).await;
                messages.set(done);
                error.set(failure);
                submitting.set(false);
                redraw.force_update();
            });
        })
    };

    let blocks = saved.borrow().summary();

    html! {
        <div class="page add-data-page">
            <h1>{ "Add Data" }</h1>
            <div class="sections">
                <ConstructorSection on_save={on_constructor} disabled={*submitting} />
                <DriverSection on_save={on_driver} disabled={*submitting} />
                <RaceSection on_save={on_race} disabled={*submitting} />
            </div>

            <section class="summary">
                <h2>{ "Summary" }</h2>
                if blocks.is_empty() {
                    <div class="no-results-message"><p>{ "Nothing saved yet." }</p></div>
                } else {
                    { for blocks.iter().map(|b| render_block(b, *submitting, on_action.clone())) }
                }
            </section>

            <button class="btn-primary" disabled={*submitting} onclick={on_submit}>
                { if *submitting { "Submitting..." } else { "Submit Data" } }
            </button>
            if *submitting {
                { render_loading("submission") }
            }
            if !messages.is_empty() {
                <div class="success-message">{ messages.join(" ") }</div>
            }
            if let Some(err) = &*error {
                { render_error(err) }
            }
        </div>
    }
}
