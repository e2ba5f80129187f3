//! Session state mediating between the clipping operations and the
//! rendering layer.

use std::path::Path;

use crate::error::{Result, SceneError};
use crate::geometry::{ClipWindow, Polygon, Segment};
use crate::io;
use crate::math::Point2;
use crate::operations::{MidpointClip, SutherlandHodgmanClip};

/// Which kind of data set the scene currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No data loaded.
    #[default]
    None,
    /// Segment set, clipped by midpoint subdivision.
    Segments,
    /// Polygon, clipped with Sutherland-Hodgman.
    Polygon,
}

/// The active data set plus its derived clipping outputs. A sum type so
/// that stale data from a previous mode cannot coexist with the new one.
#[derive(Debug, Default)]
enum SceneData {
    #[default]
    Empty,
    Segments {
        original: Vec<Segment>,
        visible: Vec<Segment>,
        intersections: Vec<Point2>,
    },
    Polygon {
        original: Polygon,
        clipped: Polygon,
        intersections: Vec<Point2>,
    },
}

/// Owns the clip window, the loaded geometry, and the eagerly computed
/// clipping results.
///
/// Every load wholesale-replaces the previous data set and reclips
/// immediately; outputs are never recomputed on query. A failed load leaves
/// the previous state untouched.
#[derive(Debug, Default)]
pub struct Scene {
    window: Option<ClipWindow>,
    data: SceneData,
}

impl Scene {
    /// Creates an empty scene with no window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.data {
            SceneData::Empty => Mode::None,
            SceneData::Segments { .. } => Mode::Segments,
            SceneData::Polygon { .. } => Mode::Polygon,
        }
    }

    /// Returns the current clip window, if one has been supplied.
    #[must_use]
    pub fn window(&self) -> Option<&ClipWindow> {
        self.window.as_ref()
    }

    /// Returns `true` if a clip window has been supplied.
    #[must_use]
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Loads a segment set and clips it against `window`, replacing any
    /// previous data set.
    pub fn load_segments(&mut self, segments: Vec<Segment>, window: ClipWindow) {
        let output = MidpointClip::new(segments.clone(), window).execute();
        self.window = Some(window);
        self.data = SceneData::Segments {
            original: segments,
            visible: output.visible,
            intersections: output.intersections,
        };
    }

    /// Loads a polygon and clips it against `window`, replacing any
    /// previous data set.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::InsufficientVertices` for fewer than 3
    /// vertices; the previous state is left untouched.
    pub fn load_polygon(&mut self, polygon: Polygon, window: ClipWindow) -> Result<()> {
        if polygon.len() < 3 {
            return Err(SceneError::InsufficientVertices(polygon.len()).into());
        }

        let output = SutherlandHodgmanClip::new(polygon.clone(), window).execute();
        self.window = Some(window);
        self.data = SceneData::Polygon {
            original: polygon,
            clipped: output.polygon,
            intersections: output.intersections,
        };
        Ok(())
    }

    /// Parses a segment file and loads it.
    ///
    /// # Errors
    ///
    /// Returns a parse or I/O error; the previous state is left untouched
    /// on failure.
    pub fn load_segments_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let parsed = io::read_segments_file(path)?;
        self.load_segments(parsed.segments, parsed.window);
        Ok(())
    }

    /// Parses a polygon file and loads it.
    ///
    /// # Errors
    ///
    /// Returns a parse or I/O error, or `SceneError::InsufficientVertices`;
    /// the previous state is left untouched on failure.
    pub fn load_polygon_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let parsed = io::read_polygon_file(path)?;
        self.load_polygon(parsed.polygon, parsed.window)
    }

    /// Discards all geometry, results, and the window.
    pub fn clear(&mut self) {
        self.window = None;
        self.data = SceneData::Empty;
    }

    /// The original segments; empty outside segment mode.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match &self.data {
            SceneData::Segments { original, .. } => original,
            _ => &[],
        }
    }

    /// The visible sub-segments; empty outside segment mode.
    #[must_use]
    pub fn visible_segments(&self) -> &[Segment] {
        match &self.data {
            SceneData::Segments { visible, .. } => visible,
            _ => &[],
        }
    }

    /// Exact window-edge intersections of the original segments; empty
    /// outside segment mode.
    #[must_use]
    pub fn segment_intersections(&self) -> &[Point2] {
        match &self.data {
            SceneData::Segments { intersections, .. } => intersections,
            _ => &[],
        }
    }

    /// The original polygon; `None` outside polygon mode.
    #[must_use]
    pub fn polygon(&self) -> Option<&Polygon> {
        match &self.data {
            SceneData::Polygon { original, .. } => Some(original),
            _ => None,
        }
    }

    /// The clipped polygon; `None` outside polygon mode.
    #[must_use]
    pub fn clipped_polygon(&self) -> Option<&Polygon> {
        match &self.data {
            SceneData::Polygon { clipped, .. } => Some(clipped),
            _ => None,
        }
    }

    /// Intersection points produced by the polygon clip; empty outside
    /// polygon mode.
    #[must_use]
    pub fn polygon_intersections(&self) -> &[Point2] {
        match &self.data {
            SceneData::Polygon { intersections, .. } => intersections,
            _ => &[],
        }
    }
}
