//! Widgets composed by the browser's render pass.

pub mod detail;
pub mod footer;
pub mod prompt;
pub mod rows;
pub mod table;

pub use detail::render_detail;
pub use footer::{FooterContext, render_error_banner, render_footer};
pub use prompt::{InputContext, ProgressState, render_input};
pub use table::{TableContext, render_table};
