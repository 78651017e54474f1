//! Adapters binding the concrete provider clients to the engine's capability traits,
//! including DTO and error conversion.

pub mod mondo;
pub mod uber;

pub use mondo::MondoProvider;
pub use uber::UberProvider;
