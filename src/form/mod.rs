mod field;
mod state;

pub use field::{FieldKey, FieldState};
pub use state::{FormMode, FormState, SubmitRequest, Submission};
