/// What `next_step` does when a matched decision branch names a step that is not in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTargetPolicy {
    /// Treat the dangling branch as the end of the flow.
    #[default]
    End,
    /// Ignore the branch and advance sequentially.
    FallThrough,
}

/// How `next_step` advances when no decision point applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvancePolicy {
    /// Next step in list order whose conditional makes it visible.
    #[default]
    SkipHidden,
    /// Next step in list order, visible or not.
    Structural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorOptions {
    pub missing_target: MissingTargetPolicy,
    pub advance: AdvancePolicy,
}
