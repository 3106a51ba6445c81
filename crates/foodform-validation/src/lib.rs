//! foodform validation core
//!
//! Pure rule functions shared by the server-side form and the WASM bindings.
//! Each rule either passes or returns the message shown under the field.

pub mod choice;
pub mod numeric;
pub mod presence;

// Re-export all validators
pub use choice::*;
pub use numeric::*;
pub use presence::*;
