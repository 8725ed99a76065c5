#![forbid(unsafe_code)]

mod rendering;
mod triangulation;

pub use rendering::{init_tracing, render_canvas_to_png, render_points_to_png, RenderConfig};
pub use triangulation::BowyerWatson;
