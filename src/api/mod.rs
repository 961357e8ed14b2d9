pub mod api;
pub mod server;
pub mod stream;

pub use api::*;
pub use server::*;
pub use stream::*;
