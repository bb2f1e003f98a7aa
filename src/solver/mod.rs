//! Parallel exhaustive solve of a paytable into a sink.
pub mod batch;
pub use batch::*;

pub mod coordinator;
pub use coordinator::*;

pub mod interrupt;
pub use interrupt::*;

pub mod progress;
pub use progress::*;

pub mod report;
pub use report::*;

pub mod retry;

pub mod settings;
pub use settings::*;

pub mod space;
pub use space::*;

pub mod worker;
pub use worker::*;

pub mod verify;
pub use verify::*;
