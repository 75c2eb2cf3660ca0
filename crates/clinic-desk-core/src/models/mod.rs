//! Domain models for the clinic-desk system.

mod appointment;
mod attendance;
mod invoice;
mod patient;
mod salary;
mod staff;

pub use appointment::*;
pub use attendance::*;
pub use invoice::*;
pub use patient::*;
pub use salary::*;
pub use staff::*;
