mod connect;
mod schema;
mod sink;
mod source;

pub use connect::*;
pub use schema::*;
pub use sink::*;
pub use source::*;
