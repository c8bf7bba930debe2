use serde::{Deserialize, Serialize};

/// A named association between a user label and a network interface,
/// persisted by the backend.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Rule {
    pub id: i64,
    pub name: String,
    pub interface: String,
}

/// Selectable interface identifier. The backend sends bare strings.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(transparent)]
pub struct Interface {
    pub name: String,
}

/// Creation form buffer; never persisted.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct RuleDraft {
    pub name: String,
    pub interface: String,
}

/// One `{name, interface}` pair of the `/update_rules` payload.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RulePatch {
    pub name: String,
    pub interface: String,
}
