pub mod create_event;
pub mod delete_event;
pub mod update_event;

pub use create_event::*;
pub use delete_event::*;
pub use update_event::*;
