mod confirm;
mod input;
mod options;
mod runtime;
mod status;
mod terminal;

pub use options::UiOptions;
pub use runtime::App;
pub(crate) use status::Severity;
