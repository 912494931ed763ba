//! Input/output helpers.
//!
//! - countries list JSON (`countries`)
//! - CSV report writing/reading (`export`)

pub mod countries;
pub mod export;

pub use countries::*;
pub use export::*;
