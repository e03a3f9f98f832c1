pub(crate) mod decision;
pub(crate) mod flow;
pub(crate) mod step;
