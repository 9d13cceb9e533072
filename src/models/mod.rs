//! Data models

pub mod offender;
pub mod settings;
pub mod signal;
pub mod transaction;

pub use offender::*;
pub use settings::*;
pub use signal::*;
pub use transaction::*;
