mod components;
mod view;

pub(crate) use view::{ConfirmRender, UiContext, draw};
