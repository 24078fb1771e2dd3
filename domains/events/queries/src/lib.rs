pub mod filter_events;
pub mod get_event;
pub mod list_events;
pub mod search_events;
pub mod upcoming_events;

pub use filter_events::*;
pub use get_event::*;
pub use list_events::*;
pub use search_events::*;
pub use upcoming_events::*;
