pub mod catalog;
pub use catalog::*;

pub mod pays;
pub use pays::*;

pub mod paytable;
pub use paytable::*;
