//! Shared Yew view pieces used by several pages.

use crate::config::MAX_PAGE_BUTTONS;
use f1_stats::format::{check_mark, number, or_dash, position};
use f1_stats::models::RaceResult;
use f1_stats::PageNav;
use yew::prelude::*;

pub fn render_loading(what: &str) -> Html {
    html! { <div class="loading">{ format!("Loading {}...", what) }</div> }
}

pub fn render_error(message: &str) -> Html {
    html! { <div class="error-message">{ message }</div> }
}

pub fn render_empty(message: &str) -> Html {
    html! { <div class="no-results-message"><p>{ message }</p></div> }
}

pub fn render_badge(text: &str, class: &str) -> Html {
    html! { <span class={classes!("badge", class.to_string())}>{ text }</span> }
}

/// Label/value line used by detail panels and the comparison view.
pub fn render_stat(label: &str, value: String) -> Html {
    html! {
        <div class="stat-item">
            <span class="stat-label">{ label }</span>
            <span class="stat-value">{ value }</span>
        </div>
    }
}

/// Race results table, rows already in display order.
pub fn render_results_table(rows: &[RaceResult]) -> Html {
    if rows.is_empty() {
        return render_empty("No results available for this race.");
    }
    html! {
        <div class="table-container">
            <table class="results-table">
                <thead>
                    <tr>
                        <th>{ "Pos" }</th>
                        <th>{ "No." }</th>
                        <th>{ "Driver" }</th>
                        <th>{ "Constructor" }</th>
                        <th>{ "Grid" }</th>
                        <th>{ "Quali" }</th>
                        <th>{ "Points" }</th>
                        <th>{ "Pole" }</th>
                    </tr>
                </thead>
                <tbody>
                    { rows.iter().map(|r| html! {
                        <tr>
                            <td>{ or_dash(r.position_display_order) }</td>
                            <td>{ or_dash(r.driver_number) }</td>
                            <td>{ r.driver_label() }</td>
                            <td>{ r.constructor_label() }</td>
                            <td>{ position(r.race_grid_position_number) }</td>
                            <td>{ position(r.race_qualification_position_number) }</td>
                            <td>{ number(r.race_points) }</td>
                            <td>{ check_mark(r.race_pole_position) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub current: u32,
    pub total: u32,
    pub on_page: Callback<u32>,
}

/// First/prev, up to five numbered buttons, next/last. Hidden for one page.
#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let Some(nav) = PageNav::new(props.current, props.total, MAX_PAGE_BUTTONS) else {
        return html! {};
    };
    let go = |page: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    html! {
        <nav class="pagination">
            <button class="page-btn" disabled={nav.at_start()} onclick={go(1)}>{ "«" }</button>
            <button class="page-btn" disabled={nav.at_start()} onclick={go(nav.prev())}>{ "‹" }</button>
            { nav.window.clone().map(|page| html! {
                <button
                    class={classes!("page-btn", (page == nav.current).then_some("active"))}
                    onclick={go(page)}
                >
                    { page }
                </button>
            }).collect::<Html>() }
            <button class="page-btn" disabled={nav.at_end()} onclick={go(nav.next())}>{ "›" }</button>
            <button class="page-btn" disabled={nav.at_end()} onclick={go(nav.total)}>{ "»" }</button>
            <span class="page-info">{ format!("Page {} of {}", nav.current, nav.total) }</span>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailPanelProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay panel opened from a list card.
#[function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="detail-overlay">
            <div class="detail-panel">
                <div class="detail-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="close-btn" onclick={close}>{ "×" }</button>
                </div>
                <div class="detail-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

/// One entry of a [`SearchDropdown`].
#[derive(Clone, PartialEq)]
pub struct DropdownItem {
    pub id: String,
    pub label: String,
    pub detail: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct SearchDropdownProps {
    pub id: AttrValue,
    pub query: AttrValue,
    pub placeholder: AttrValue,
    pub items: Vec<DropdownItem>,
    pub on_query: Callback<String>,
    pub on_select: Callback<String>,
    #[prop_or(AttrValue::Static("No results"))]
    pub empty_text: AttrValue,
    /// Shown in place of the items, e.g. "Error loading".
    #[prop_or_default]
    pub status: Option<AttrValue>,
}

/// Text input with a filtered list that opens on focus.
#[function_component(SearchDropdown)]
pub fn search_dropdown(props: &SearchDropdownProps) -> Html {
    let open = use_state(|| false);

    let onfocus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(true))
    };
    let onblur = {
        let open = open.clone();
        // Delay so a click on an item lands before the list closes
        Callback::from(move |_: FocusEvent| {
            let open = open.clone();
            gloo_timers::callback::Timeout::new(150, move || open.set(false)).forget();
        })
    };
    let oninput = {
        let open = open.clone();
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            open.set(true);
            on_query.emit(crate::utils::input_value(&e));
        })
    };

    let list = if let Some(status) = &props.status {
        html! { <div class="dropdown-item no-results">{ status.clone() }</div> }
    } else if props.items.is_empty() {
        html! { <div class="dropdown-item no-results">{ props.empty_text.clone() }</div> }
    } else {
        props
            .items
            .iter()
            .map(|item| {
                let onclick = {
                    let open = open.clone();
                    let on_select = props.on_select.clone();
                    let id = item.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        open.set(false);
                        on_select.emit(id.clone());
                    })
                };
                html! {
                    <div class="dropdown-item" {onclick}>
                        <div class="item-name">{ &item.label }</div>
                        if let Some(detail) = &item.detail {
                            <div class="item-detail">{ detail }</div>
                        }
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="searchable-dropdown">
            <input
                type="text"
                id={props.id.clone()}
                autocomplete="off"
                placeholder={props.placeholder.clone()}
                value={props.query.clone()}
                {oninput}
                {onfocus}
                {onblur}
            />
            <div class={classes!("dropdown-list", (*open).then_some("open"))}>
                { list }
            </div>
        </div>
    }
}
