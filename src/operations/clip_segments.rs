use crate::geometry::{ClipWindow, Edge, Segment};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// Squared length below which a sub-segment is discarded as invisible.
/// Doubles as the recursion base case, bounding the bisection depth at
/// O(log(length / epsilon)).
const MIN_LENGTH_SQ: f64 = 1e-3;

/// Clips line segments against a window by recursive midpoint subdivision.
///
/// Besides the visible sub-segments, computes the exact intersection points
/// of each original segment with the bounded extent of the four window
/// edges. The two outputs are independent: the exact points annotate the
/// originals and are not derived from the subdivision.
#[derive(Debug)]
pub struct MidpointClip {
    segments: Vec<Segment>,
    window: ClipWindow,
}

/// Output of [`MidpointClip`].
#[derive(Debug, Clone, Default)]
pub struct MidpointClipOutput {
    /// Visible sub-segments, concatenated across all inputs.
    pub visible: Vec<Segment>,
    /// Exact edge intersections, concatenated across all inputs.
    pub intersections: Vec<Point2>,
}

impl MidpointClip {
    /// Creates a new midpoint clipping operation.
    #[must_use]
    pub fn new(segments: Vec<Segment>, window: ClipWindow) -> Self {
        Self { segments, window }
    }

    /// Executes the operation over all input segments.
    #[must_use]
    pub fn execute(&self) -> MidpointClipOutput {
        let mut out = MidpointClipOutput::default();
        for seg in &self.segments {
            edge_intersections(seg, &self.window, &mut out.intersections);
            subdivide(seg.a, seg.b, &self.window, &mut out.visible);
        }
        out
    }
}

/// Recursive bisection step.
///
/// A segment is emitted whole when both endpoints are inside, dropped when
/// shorter than the epsilon or when both endpoints lie beyond the same
/// bound, and otherwise split at its midpoint with both halves resolved
/// independently.
fn subdivide(a: Point2, b: Point2, window: &ClipWindow, out: &mut Vec<Segment>) {
    let seg = Segment::new(a, b);
    if seg.length_sq() < MIN_LENGTH_SQ {
        return;
    }
    if window.rejects_segment(&a, &b) {
        return;
    }
    if window.contains(&a) && window.contains(&b) {
        out.push(seg);
        return;
    }

    let m = seg.midpoint();
    subdivide(a, m, window, out);
    subdivide(m, b, window, out);
}

/// Records the exact crossings of `seg` with the bounded extent of each
/// window edge, in edge order Left, Right, Bottom, Top. A segment parallel
/// to an edge records nothing for it.
fn edge_intersections(seg: &Segment, window: &ClipWindow, out: &mut Vec<Point2>) {
    for edge in Edge::ALL {
        let es = window.edge_segment(edge);
        if let Some((pt, _, _)) = segment_segment_intersect_2d(&seg.a, &seg.b, &es.a, &es.b) {
            out.push(pt);
        }
    }
}
