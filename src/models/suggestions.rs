use serde::{Deserialize, Serialize};

/// Autocomplete names returned by `GET /autocomplete`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}
