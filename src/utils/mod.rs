// Text table rendering
pub mod table;

pub use table::{fit, render_rows, render_table, truncate};
