//! Transaction broadcast and confirmation
//!
//! The ocean interface drains a FIFO of signed transactions one job at a
//! time and keeps the drawer state the UI observes.

pub mod error_mapping;
pub mod explorer;
pub mod interface_state;
pub mod ocean_interface;
pub mod queue;

pub use error_mapping::*;
pub use explorer::*;
pub use interface_state::*;
pub use ocean_interface::*;
pub use queue::*;
