mod calendar;
mod error;
mod event;
pub mod loader;
mod month;

pub use calendar::Calendar;
pub use error::{EventError, LoadError, ParseMonthError};
pub use event::Event;
pub use month::Month;
