mod clip_polygon;
mod clip_segments;

pub use clip_polygon::{PolygonClipOutput, SutherlandHodgmanClip};
pub use clip_segments::{MidpointClip, MidpointClipOutput};
