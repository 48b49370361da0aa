#![deny(rust_2018_idioms)]

pub mod api;
mod app;
pub mod domain;
pub mod form;
mod presentation;
pub mod store;

pub use api::{ApiEvent, ApiHandle, RegistryClient};
pub use app::{App, UiOptions};

pub mod prelude {
    pub use super::{App, RegistryClient, UiOptions};
}
