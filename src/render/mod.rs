pub mod region;
pub mod renderer;

pub use region::{RegionState, RegionView, ResultRegion};
pub use renderer::{format_score, Renderer};
