pub mod chart;
pub mod sixel;

pub use chart::{create_plot, output_path};
pub use sixel::{display_sixel, is_sixel_supported, sixel_dimensions};
