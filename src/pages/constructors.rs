use crate::components::{render_empty, render_error, render_loading, render_stat, DetailPanel, PaginationBar};
use crate::config::api_client;
use crate::hooks::{use_remote, FetchState};
use crate::utils::bind_text;
use f1_stats::api::ConstructorPage;
use f1_stats::filters::ConstructorFilters;
use f1_stats::format::{number, or_dash, or_na};
use f1_stats::models::Constructor;
use yew::prelude::*;

fn render_card(team: &Constructor, on_open: Callback<String>) -> Html {
    let id = team.id.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_open.emit(id.clone()));
    html! {
        <div class="card" {onclick}>
            <div class="card-header">
                <div class="name">{ team.display_name() }</div>
                <div class="nation">{ or_dash(team.nationality.as_deref()) }</div>
            </div>
            <div class="card-stats">
                { render_stat("Titles", or_dash(team.total_championship_wins)) }
                { render_stat("Wins", or_dash(team.total_race_wins)) }
                { render_stat("Poles", or_dash(team.total_pole_positions)) }
                { render_stat("Podiums", or_dash(team.total_podiums)) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConstructorDetailProps {
    id: String,
    on_close: Callback<()>,
}

#[function_component(ConstructorDetail)]
fn constructor_detail(props: &ConstructorDetailProps) -> Html {
    let api = api_client();
    let state = use_remote(props.id.clone(), move |id: String| async move {
        api.constructor(&id).await
    });

    let (title, body) = match &state {
        FetchState::Loading => ("Constructor".to_string(), render_loading("constructor")),
        FetchState::Failed(e) => ("Constructor".to_string(), render_error(e)),
        FetchState::Ready(c) => (
            c.full_name.clone().unwrap_or_else(|| c.display_name().to_string()),
            html! {
                <div class="stat-grid">
                    { render_stat("Nationality", or_na(c.nationality.as_deref(), "")) }
                    { render_stat("Championships", or_na(c.total_championship_wins, "")) }
                    { render_stat("Best Championship", or_na(c.best_championship_position.as_deref(), "")) }
                    { render_stat("Race Starts", or_na(c.total_race_starts, "")) }
                    { render_stat("Wins", or_na(c.total_race_wins, "")) }
                    { render_stat("Podiums", or_na(c.total_podiums, "")) }
                    { render_stat("Poles", or_na(c.total_pole_positions, "")) }
                    { render_stat("Points", number(c.total_points)) }
                </div>
            },
        ),
    };

    html! {
        <DetailPanel title={title} on_close={props.on_close.clone()}>
            { body }
        </DetailPanel>
    }
}

#[function_component(ConstructorsPage)]
pub fn constructors_page() -> Html {
    let name = use_state(String::new);
    let nationality = use_state(String::new);
    let champs_min = use_state(String::new);
    let applied = use_state(|| (ConstructorFilters::default(), 1u32));
    let filter_error = use_state(|| None::<String>);
    let selected = use_state(|| None::<String>);

    let api = api_client();
    let list: FetchState<ConstructorPage> =
        use_remote((*applied).clone(), move |(filters, page)| async move {
            api.list_constructors(&filters, page).await
        });

    let onsubmit = {
        let name = name.clone();
        let nationality = nationality.clone();
        let champs_min = champs_min.clone();
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filters = ConstructorFilters {
                name: (*name).clone(),
                nationality: (*nationality).clone(),
                champs_min: (*champs_min).clone(),
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
        let name = name.clone();
        let nationality = nationality.clone();
        let champs_min = champs_min.clone();
        let applied = applied.clone();
        let filter_error = filter_error.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            nationality.set(String::new());
            champs_min.set(String::new());
            filter_error.set(None);
            applied.set((ConstructorFilters::default(), 1));
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
        <div class="page constructors-page">
            <h1>{ "Constructors" }</h1>
            <form class="filters" {onsubmit}>
                <input type="text" placeholder="Name" value={(*name).clone()} oninput={bind_text(&name)} />
                <input type="text" placeholder="Nationality" value={(*nationality).clone()} oninput={bind_text(&nationality)} />
                <input type="number" min="0" placeholder="Min. championships" value={(*champs_min).clone()} oninput={bind_text(&champs_min)} />
                <button type="submit" class="btn-primary">{ "Apply" }</button>
                <button type="button" class="btn-secondary" onclick={onreset}>{ "Reset" }</button>
            </form>
            if let Some(err) = &*filter_error {
                <div class="input-error">{ err }</div>
            }

            {
                match &list {
                    FetchState::Loading => render_loading("constructors"),
                    FetchState::Failed(e) => render_error(e),
                    FetchState::Ready(page) if page.constructors.is_empty() => render_empty("No constructors found."),
                    FetchState::Ready(page) => html! {
                        <>
                            <div class="card-grid">
                                { page.constructors.iter().map(|c| render_card(c, on_open.clone())).collect::<Html>() }
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
                <ConstructorDetail {id} {on_close} />
            }
        </div>
    }
}
