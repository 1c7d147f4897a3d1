use serde::{Deserialize, Serialize};

use crate::{numeric::lenient_i64, record::Validate};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessStep {
    #[serde(deserialize_with = "lenient_i64")]
    pub step: i64,
    pub title: String,
    pub desc: String,
}

impl Validate for ProcessStep {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_from_form_string() {
        let p: ProcessStep = serde_json::from_str(r#"{"step":"2","title":"Strategy"}"#).unwrap();
        assert_eq!(p.step, 2);
        assert_eq!(p.desc, "");
    }
}
