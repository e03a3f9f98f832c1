use std::sync::Arc;

use onboard_core::{Flow, FlowNavigator, NavigatorOptions};

/// What a UI sees for one flow version.
#[derive(Debug, Clone)]
pub enum FlowState {
    /// Not resolved yet, or a resolution is in flight.
    Loading,
    Ready(Arc<Flow>),
    /// The resolver failed; the reason is kept so a UI can offer a retry.
    Unavailable { reason: String },
}

impl FlowState {
    pub fn flow(&self) -> Option<&Arc<Flow>> {
        match self {
            Self::Ready(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Navigation is only possible over a ready flow.
    pub fn navigator(&self) -> Option<FlowNavigator<'_>> {
        self.navigator_with(NavigatorOptions::default())
    }

    pub fn navigator_with(&self, options: NavigatorOptions) -> Option<FlowNavigator<'_>> {
        self.flow()
            .map(|flow| FlowNavigator::with_options(flow, options))
    }
}
