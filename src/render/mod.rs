//! Markup renderers shared by export and clipboard copy

pub mod html;

pub use html::{render_builder, render_forms_list, render_page, BuilderView};
