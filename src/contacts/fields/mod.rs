//! Validated field types.
//!
//! Each type has a single validating constructor, so a value that exists is a
//! value that passed its format rule. [`crate::model::Contact`] builds its
//! fields through these constructors both on creation and on every setter call.

pub mod email;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use name::FirstName;
pub use phone::PhoneNumber;
