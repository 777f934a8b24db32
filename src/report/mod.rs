pub mod html;
pub mod text;

pub use html::export_html;
pub use text::render_text;
