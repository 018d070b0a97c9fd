//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the wallet system.

pub mod environment;
pub mod loan;
pub mod notification;
pub mod ocean;

// Re-export entities
pub use environment::*;
pub use loan::*;
pub use notification::*;
pub use ocean::*;
