pub mod client;
pub mod devices;
pub mod errors;
pub mod health;
pub mod path;
pub mod request;
pub mod response;
pub mod tenants;

pub use client::{Client, ClientI};
