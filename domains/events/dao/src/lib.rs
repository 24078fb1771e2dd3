pub mod events;
pub mod memory;
pub mod store;

pub use events::EventDao;
pub use memory::InMemoryEventStore;
pub use store::EventStore;
