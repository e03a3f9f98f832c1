pub mod graph;
pub mod inspect;
pub mod navigate;
pub mod resolve;
pub mod steps;
pub mod validate;
pub mod walk;
