/// Overrides the sequential "next step" for one step, keyed on a user-data field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecisionPoint {
    #[serde(rename = "stepId")]
    pub step_id: String,

    pub field: String,

    /// Checked in order; the first branch whose `value` matches wins.
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Branch {
    pub value: String,

    #[serde(rename = "nextStep")]
    pub next_step: String,
}
