use serde::{Deserialize, Serialize};

use crate::{numeric::lenient_i64, record::Validate};

/// Animated counter in the stats grid, e.g. `500` + `"+"` labelled "Enterprise Clients".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Metric {
    pub label: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub target: i64,
    pub suffix: String,
}

impl Validate for Metric {}
