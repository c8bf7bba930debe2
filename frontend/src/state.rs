use std::rc::Rc;

use yew::Reducible;

use crate::models::{Interface, Rule, RuleDraft, RulePatch};

/// Pending interface reassignment for one listed rule. Kept outside the
/// rules snapshot so the list itself stays exactly what the server sent.
#[derive(Clone, PartialEq, Debug)]
pub struct EditDraft {
    pub index: usize,
    pub interface: String,
}

/// The whole reactive state of the view. Mutated only through [`Action`].
#[derive(Clone, PartialEq, Debug)]
pub struct ViewState {
    pub rules: Vec<Rule>,
    pub interfaces: Vec<Interface>,
    pub draft: RuleDraft,
    pub edit: Option<EditDraft>,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            rules: Vec::new(),
            interfaces: Vec::new(),
            draft: RuleDraft::default(),
            edit: None,
            loading: true,
        }
    }
}

impl ViewState {
    /// Id of the rule at `index` in the current snapshot. Stale indices
    /// left over from a concurrent refresh resolve to `None`.
    pub fn rule_id(&self, index: usize) -> Option<i64> {
        self.rules.get(index).map(|rule| rule.id)
    }

    /// Pair list sent to `/update_rules`: the current snapshot with the
    /// pending reassignment applied at its index.
    pub fn patched_pairs(&self) -> Vec<RulePatch> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| RulePatch {
                name: rule.name.clone(),
                interface: match &self.edit {
                    Some(edit) if edit.index == i => edit.interface.clone(),
                    _ => rule.interface.clone(),
                },
            })
            .collect()
    }
}

pub enum Action {
    RulesFetched(Vec<Rule>),
    InterfacesFetched(Vec<Interface>),
    DraftName(String),
    DraftInterface(String),
    DraftCleared,
    EditStarted(usize),
    EditInterface(String),
    EditCleared,
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Wholesale replacement; nothing of the previous list survives.
            Action::RulesFetched(rules) => {
                next.rules = rules;
                next.loading = false;
                next.edit = None;
            }
            Action::InterfacesFetched(interfaces) => next.interfaces = interfaces,
            Action::DraftName(name) => next.draft.name = name,
            Action::DraftInterface(interface) => next.draft.interface = interface,
            Action::DraftCleared => next.draft = RuleDraft::default(),
            Action::EditStarted(index) => {
                next.edit = next.rules.get(index).map(|rule| EditDraft {
                    index,
                    interface: rule.interface.clone(),
                });
            }
            Action::EditInterface(interface) => {
                if let Some(edit) = next.edit.as_mut() {
                    edit.interface = interface;
                }
            }
            Action::EditCleared => next.edit = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ViewState, action: Action) -> ViewState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn rule(id: i64, name: &str, interface: &str) -> Rule {
        Rule {
            id,
            name: name.to_string(),
            interface: interface.to_string(),
        }
    }

    #[test]
    fn starts_loading_with_empty_lists() {
        let state = ViewState::default();
        assert!(state.loading);
        assert!(state.rules.is_empty());
        assert!(state.interfaces.is_empty());
        assert_eq!(state.draft, RuleDraft::default());
        assert!(state.edit.is_none());
    }

    #[test]
    fn rules_fetched_replaces_the_list_and_clears_loading() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(1, "A", "eth0")]),
        );
        assert!(!state.loading);
        assert_eq!(state.rules.len(), 1);

        // a later snapshot replaces everything, it never merges
        let state = apply(state, Action::RulesFetched(vec![rule(2, "B", "eth1")]));
        assert!(!state.loading);
        assert_eq!(state.rules.len(), 1);
        assert_eq!(state.rules[0].id, 2);
    }

    #[test]
    fn loading_never_turns_back_on() {
        let mut state = apply(ViewState::default(), Action::RulesFetched(Vec::new()));
        assert!(!state.loading);
        for action in [
            Action::InterfacesFetched(vec![Interface {
                name: "eth0".to_string(),
            }]),
            Action::DraftName("n".to_string()),
            Action::DraftInterface("i".to_string()),
            Action::DraftCleared,
            Action::EditStarted(0),
            Action::EditInterface("eth1".to_string()),
            Action::EditCleared,
            Action::RulesFetched(vec![rule(1, "A", "eth0")]),
        ] {
            state = apply(state, action);
            assert!(!state.loading);
        }
    }

    #[test]
    fn interfaces_fetched_leaves_rules_and_loading_alone() {
        let state = apply(
            ViewState::default(),
            Action::InterfacesFetched(vec![
                Interface {
                    name: "eth0".to_string(),
                },
                Interface {
                    name: "eth1".to_string(),
                },
            ]),
        );
        assert!(state.loading);
        assert!(state.rules.is_empty());
        assert_eq!(state.interfaces.len(), 2);
    }

    #[test]
    fn draft_edits_and_reset() {
        let state = apply(ViewState::default(), Action::DraftName("n".to_string()));
        let state = apply(state, Action::DraftInterface("i".to_string()));
        assert_eq!(state.draft.name, "n");
        assert_eq!(state.draft.interface, "i");

        let state = apply(state, Action::DraftCleared);
        assert_eq!(state.draft, RuleDraft::default());
    }

    #[test]
    fn edit_tracks_the_selected_row() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(1, "A", "eth0"), rule(2, "B", "eth1")]),
        );
        let state = apply(state, Action::EditStarted(1));
        let edit = state.edit.clone().unwrap();
        assert_eq!(edit.index, 1);
        assert_eq!(edit.interface, "eth1");

        let state = apply(state, Action::EditInterface("eth0".to_string()));
        assert_eq!(state.edit.clone().unwrap().interface, "eth0");

        let state = apply(state, Action::EditCleared);
        assert!(state.edit.is_none());
    }

    #[test]
    fn delete_targets_resolve_through_the_snapshot() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(7, "A", "eth0")]),
        );
        assert_eq!(state.rule_id(0), Some(7));
        assert_eq!(state.rule_id(5), None);
    }

    #[test]
    fn edit_on_an_out_of_range_row_is_ignored() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(1, "A", "eth0")]),
        );
        let state = apply(state, Action::EditStarted(5));
        assert!(state.edit.is_none());
    }

    #[test]
    fn a_fresh_snapshot_drops_the_pending_edit() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(1, "A", "eth0")]),
        );
        let state = apply(state, Action::EditStarted(0));
        assert!(state.edit.is_some());

        let state = apply(state, Action::RulesFetched(vec![rule(1, "A", "eth0")]));
        assert!(state.edit.is_none());
    }

    #[test]
    fn patched_pairs_applies_the_edit_at_its_index_only() {
        let state = apply(
            ViewState::default(),
            Action::RulesFetched(vec![rule(1, "A", "eth0"), rule(2, "B", "eth0")]),
        );
        let state = apply(state, Action::EditStarted(1));
        let state = apply(state, Action::EditInterface("eth1".to_string()));

        let pairs = state.patched_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "A");
        assert_eq!(pairs[0].interface, "eth0");
        assert_eq!(pairs[1].name, "B");
        assert_eq!(pairs[1].interface, "eth1");
    }
}
