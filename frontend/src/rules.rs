use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, HttpBackend, WriteOutcome};
use crate::models::Interface;
use crate::state::{Action, ViewState};

/* -------------------------------------------------------------------------- */
/*                        composant RuleManagerView                           */
/* -------------------------------------------------------------------------- */

#[function_component(RuleManagerView)]
pub fn rule_manager_view() -> Html {
    let state = use_reducer(ViewState::default);

    /* ------------------------------------------------------------------ */
    /* 1) initial load: both reads in flight at once, no ordering         */
    /* ------------------------------------------------------------------ */
    {
        let st = state.clone();
        use_effect_with((), move |_| {
            {
                let st = st.clone();
                spawn_local(async move {
                    match api::fetch_rules(&HttpBackend).await {
                        Ok(rules) => st.dispatch(Action::RulesFetched(rules)),
                        Err(e) => error!("get_applications: {e:?}"),
                    }
                });
            }
            spawn_local(async move {
                match api::fetch_interfaces(&HttpBackend).await {
                    Ok(list) => st.dispatch(Action::InterfacesFetched(list)),
                    Err(e) => error!("get_interfaces: {e:?}"),
                }
            });
            || ()
        });
    }

    /* ------------------------------------------------------------------ */
    /* 2) handlers UI                                                     */
    /* ------------------------------------------------------------------ */
    let on_name_input = {
        let st = state.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            st.dispatch(Action::DraftName(v));
        })
    };

    let on_draft_interface = {
        let st = state.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            st.dispatch(Action::DraftInterface(v));
        })
    };

    /* ----------- création ---------------------------------------------- */
    let on_add = {
        let st = state.clone();
        Callback::from(move |_: MouseEvent| {
            let st = st.clone();
            let draft = st.draft.clone();
            spawn_local(async move {
                match api::add_rule(&HttpBackend, &draft).await {
                    Ok(WriteOutcome::Refreshed(rules)) => {
                        st.dispatch(Action::DraftCleared);
                        st.dispatch(Action::RulesFetched(rules));
                    }
                    Ok(WriteOutcome::Accepted) => st.dispatch(Action::DraftCleared),
                    Ok(WriteOutcome::Rejected(status)) => error!("add_rule: status {status}"),
                    Err(e) => error!("add_rule: {e:?}"),
                }
            });
        })
    };

    /* ----------- suppression ------------------------------------------- */
    let on_delete = {
        let st = state.clone();
        Callback::from(move |index: usize| {
            let Some(id) = st.rule_id(index) else {
                return;
            };
            let st = st.clone();
            spawn_local(async move {
                match api::delete_rule(&HttpBackend, id).await {
                    Ok(WriteOutcome::Refreshed(rules)) => {
                        st.dispatch(Action::RulesFetched(rules));
                    }
                    Ok(WriteOutcome::Accepted) => {}
                    Ok(WriteOutcome::Rejected(status)) => error!("delete_rule: status {status}"),
                    Err(e) => error!("delete_rule: {e:?}"),
                }
            });
        })
    };

    /* ----------- réaffectation d'interface ----------------------------- */
    let on_edit_start = {
        let st = state.clone();
        Callback::from(move |index: usize| st.dispatch(Action::EditStarted(index)))
    };

    let on_edit_interface = {
        let st = state.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            st.dispatch(Action::EditInterface(v));
        })
    };

    let on_edit_cancel = {
        let st = state.clone();
        Callback::from(move |_: MouseEvent| st.dispatch(Action::EditCleared))
    };

    let on_edit_save = {
        let st = state.clone();
        Callback::from(move |_: MouseEvent| {
            let st = st.clone();
            let pairs = st.patched_pairs();
            spawn_local(async move {
                match api::update_rules(&HttpBackend, &pairs).await {
                    Ok(WriteOutcome::Refreshed(rules)) => {
                        st.dispatch(Action::EditCleared);
                        st.dispatch(Action::RulesFetched(rules));
                    }
                    Ok(WriteOutcome::Accepted) => st.dispatch(Action::EditCleared),
                    Ok(WriteOutcome::Rejected(status)) => error!("update_rules: status {status}"),
                    Err(e) => error!("update_rules: {e:?}"),
                }
            });
        })
    };

    /* ------------------------------------------------------------------ */
    /* UI                                                                 */
    /* ------------------------------------------------------------------ */
    let interface_options = |selected: &str| -> Html {
        html! {
            <>
                { for state.interfaces.iter().map(|itf: &Interface| html! {
                    <option value={itf.name.clone()} selected={itf.name == selected}>
                        { &itf.name }
                    </option>
                })}
            </>
        }
    };

    html! {
        <div class="container">
            <div class="columns">
                /* ----- colonne 1 : règles ----- */
                <div class="column" style="border:1px solid #ccc;padding:1rem;">
                    <h3>{ "Rules" }</h3>
                    {
                        if state.loading {
                            html! { <p>{ "Loading…" }</p> }
                        } else {
                            html! {
                                <ul>
                                    { for state.rules.iter().enumerate().map(|(i, rule)| html! {
                                        <li>
                                            <span>{ format!("{} ({})", rule.name, rule.interface) }</span>
                                            {
                                                match state.edit.as_ref().filter(|e| e.index == i) {
                                                    Some(edit) => html! {
                                                        <>
                                                            <select class="ml-2" onchange={on_edit_interface.clone()}>
                                                                { interface_options(&edit.interface) }
                                                            </select>
                                                            <button class="ml-1" onclick={on_edit_save.clone()}>{ "Save" }</button>
                                                            <button class="ml-1" onclick={on_edit_cancel.clone()}>{ "Cancel" }</button>
                                                        </>
                                                    },
                                                    None => html! {
                                                        <>
                                                            <button class="ml-2" onclick={{
                                                                let cb = on_edit_start.clone();
                                                                Callback::from(move |_| cb.emit(i))
                                                            }}>
                                                                { "Reassign" }
                                                            </button>
                                                            <button class="ml-1" onclick={{
                                                                let cb = on_delete.clone();
                                                                Callback::from(move |_| cb.emit(i))
                                                            }}>
                                                                { "Delete" }
                                                            </button>
                                                        </>
                                                    },
                                                }
                                            }
                                        </li>
                                    })}
                                </ul>
                            }
                        }
                    }
                </div>

                /* ----- colonne 2 : création ----- */
                <div class="column" style="border:1px solid #ccc;padding:1rem;margin-left:1rem;">
                    <h3>{ "New rule" }</h3>

                    <label>{ "Name" }<input
                        type="text"
                        value={state.draft.name.clone()}
                        oninput={on_name_input}
                    /></label>

                    <label class="mt-1">{ "Interface" }<select onchange={on_draft_interface}>
                        <option value="" selected={state.draft.interface.is_empty()}>{ "select…" }</option>
                        { interface_options(&state.draft.interface) }
                    </select></label>

                    <button class="button is-primary mt-2" onclick={on_add}>{ "Add" }</button>
                </div>
            </div>
        </div>
    }
}
