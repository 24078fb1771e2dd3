pub mod category;
pub mod clock;
pub mod events;
pub mod time_format;
pub mod validation;

pub use category::{EventCategory, UnknownCategory};
pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{Event, EventRecord, NewEvent};
pub use validation::{FieldViolation, ValidationErrors, validate};
