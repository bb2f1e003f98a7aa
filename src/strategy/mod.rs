pub mod analysis;
pub use analysis::*;

pub mod engine;
pub use engine::*;

pub mod expectation;
pub use expectation::*;

pub mod hold;
pub use hold::*;

pub mod record;
pub use record::*;
