//! Application-wide room booking state: a plain reducer wrapped in a reactive context.

pub mod actions;
pub mod selectors;
pub mod state;
pub mod store;

pub use actions::{Dispatch, RbAction, Section};
pub use state::{PageState, RbState};
pub use store::RbStore;
