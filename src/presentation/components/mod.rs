mod confirm;
mod footer;
mod form;
mod table;

pub(crate) use confirm::render_confirm;
pub(crate) use footer::render_footer;
pub(crate) use form::render_form;
pub(crate) use table::render_table;
