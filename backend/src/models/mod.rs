pub mod requirement;
pub mod schedule;
pub mod time;

pub use requirement::*;
pub use schedule::*;
pub use time::*;
