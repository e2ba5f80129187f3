//! Input parsing for the plain-text geometry formats.
//!
//! Two whitespace-delimited formats are supported: a segment set and a
//! polygon, each followed by one `xmin ymin xmax ymax` record defining the
//! clip window.

mod text;

pub use text::{
    parse_polygon, parse_segments, read_polygon_file, read_segments_file, PolygonInput,
    SegmentsInput,
};
