//! Level rendering: image pixels in, Rust source out.

mod pixels;
mod table;

pub use pixels::{transcode, Entities, PixelSource};
pub use table::{render_table, write_table};
