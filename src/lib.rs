pub mod args;
pub mod commands;
mod error;
mod fs;
mod home;
pub mod model;
mod report;
mod store;

pub use error::Error;
pub use error::Result;
pub use home::Home;
pub use store::Store;
