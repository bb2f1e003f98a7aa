pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod game;
pub use game::*;
