//! Data models for the Biblioteca server

pub mod book;
pub mod enums;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use enums::{BoolLit, DurationUnit};
pub use loan::Loan;
pub use user::User;
