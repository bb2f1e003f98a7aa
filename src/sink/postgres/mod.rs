mod client;
mod connect;
mod schema;

pub use connect::*;
pub use schema::*;
