use crate::types::{DecisionPoint, Step};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Flow {
    /// Ordered; list order is the default sequence.
    pub steps: Vec<Step>,

    #[serde(default)]
    #[serde(rename = "decisionPoints")]
    pub decision_points: Vec<DecisionPoint>,

    pub version: String,
}

impl Flow {
    /// The flow served when no user or profile exists yet: no steps, no progress.
    pub fn empty(version: impl Into<String>) -> Self {
        Self {
            steps: Vec::new(),
            decision_points: Vec::new(),
            version: version.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn decision_point(&self, step_id: &str) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|d| d.step_id == step_id)
    }
}
