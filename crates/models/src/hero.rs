use serde::{Deserialize, Serialize};

/// Hero banner content; a single document, replaced as a whole.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hero {
    pub title_line1: String,
    pub title_line2: String,
    pub subtitle: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Highlight {
    pub title: String,
    pub desc: String,
}
