use crate::utils::debounce_callback;
use f1_stats::ApiError;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use std::future::Future;
use yew::prelude::*;

/// Where a remote value is at.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }
}

/// Runs `fetch` whenever `deps` change and keeps only the answer to the
/// latest run; older answers arriving late are dropped.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fetch: F) -> FetchState<T>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            let ticket = {
                let mut g = generation.borrow_mut();
                *g = g.wrapping_add(1);
                *g
            };
            state.set(FetchState::Loading);
            let request = fetch(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                if *generation.borrow() != ticket {
                    debug!("discarding superseded response #{}", ticket);
                    return;
                }
                state.set(match result {
                    Ok(value) => FetchState::Ready(value),
                    Err(e) => {
                        warn!("request failed: {}", e);
                        FetchState::Failed(e.to_string())
                    }
                });
            });
            || ()
        });
    }

    (*state).clone()
}

/// A search box whose query is committed after the user stops typing.
pub struct Debounced {
    pub text: String,
    pub committed: String,
    pub oninput: Callback<InputEvent>,
}

#[hook]
pub fn use_debounced_text(delay_ms: u32) -> Debounced {
    let text = use_state(String::new);
    let committed = use_state(String::new);
    let timer = use_state(|| None::<Timeout>);

    let oninput = {
        let text = text.clone();
        let committed = committed.clone();
        Callback::from(move |e: InputEvent| {
            let value = crate::utils::input_value(&e);
            text.set(value.clone());
            let committed = committed.clone();
            let commit = Callback::from(move |q: String| committed.set(q.trim().to_string()));
            debounce_callback(&timer, commit, value, delay_ms);
        })
    };

    Debounced {
        text: (*text).clone(),
        committed: (*committed).clone(),
        oninput,
    }
}
