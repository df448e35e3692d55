pub mod messages;
pub mod state;
pub mod view;

pub use state::LookupState;
pub use view::{View, render};
