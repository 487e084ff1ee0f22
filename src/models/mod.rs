//! Data models for Atrium

pub mod appointment;
pub mod check_in;
pub mod employee;
pub mod enums;
pub mod staff;
pub mod visitor;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentDetails};
pub use check_in::{CheckIn, CheckInDetails};
pub use employee::Employee;
pub use enums::{AppointmentStatus, UserRole};
pub use staff::StaffUser;
pub use visitor::Visitor;
