pub mod auth;

pub use auth::{cadastrate, login};
