use crate::geometry::{ClipWindow, Edge, Polygon};
use crate::math::Point2;

/// Clips a polygon against a window with the Sutherland-Hodgman algorithm.
///
/// The vertex list is trimmed successively against the four window
/// half-planes in fixed order Left, Right, Bottom, Top. Correct for any
/// subject polygon only because the clip region is convex; non-convex
/// subjects inherit the classical algorithm's limitations.
#[derive(Debug)]
pub struct SutherlandHodgmanClip {
    polygon: Polygon,
    window: ClipWindow,
}

/// Output of [`SutherlandHodgmanClip`].
#[derive(Debug, Clone, Default)]
pub struct PolygonClipOutput {
    /// The clipped polygon. May hold fewer than 3 vertices when the input
    /// degenerates against the window.
    pub polygon: Polygon,
    /// Every intersection point produced across the four passes, in pass
    /// order. Points from intermediate passes may lie on an edge's
    /// extended line outside the window.
    pub intersections: Vec<Point2>,
}

impl SutherlandHodgmanClip {
    /// Creates a new polygon clipping operation.
    #[must_use]
    pub fn new(polygon: Polygon, window: ClipWindow) -> Self {
        Self { polygon, window }
    }

    /// Executes the four clipping passes.
    #[must_use]
    pub fn execute(&self) -> PolygonClipOutput {
        let mut vertices = self.polygon.vertices().to_vec();
        let mut intersections = Vec::new();

        for edge in Edge::ALL {
            vertices = clip_against_edge(&vertices, edge, &self.window, &mut intersections);
        }

        PolygonClipOutput {
            polygon: Polygon::new(vertices),
            intersections,
        }
    }
}

/// One half-plane pass: walks the cyclic vertex pairs (S, E) and emits
/// vertices per the four Sutherland-Hodgman cases. Intersections emitted
/// into the output polygon are also recorded in `intersections`.
fn clip_against_edge(
    poly: &[Point2],
    edge: Edge,
    window: &ClipWindow,
    intersections: &mut Vec<Point2>,
) -> Vec<Point2> {
    let mut out = Vec::with_capacity(poly.len() + 1);
    if poly.is_empty() {
        return out;
    }

    let n = poly.len();
    for i in 0..n {
        let s = poly[i];
        let e = poly[(i + 1) % n];

        let s_in = window.inside_edge(&s, edge);
        let e_in = window.inside_edge(&e, edge);

        if s_in && e_in {
            // Inside -> inside: keep E.
            out.push(e);
        } else if s_in {
            // Inside -> outside: keep the crossing.
            let ip = window.intersect_edge(&s, &e, edge);
            intersections.push(ip);
            out.push(ip);
        } else if e_in {
            // Outside -> inside: keep the crossing, then E.
            let ip = window.intersect_edge(&s, &e, edge);
            intersections.push(ip);
            out.push(ip);
            out.push(e);
        }
        // Outside -> outside: emit nothing.
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(-5.0, -5.0, 5.0, 5.0)
    }

    fn square(half: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(-half, -half),
            Point2::new(half, -half),
            Point2::new(half, half),
            Point2::new(-half, half),
        ])
    }

    fn assert_vertices_eq(actual: &Polygon, expected: &[Point2]) {
        let canon = actual.rotated_to_canonical_start();
        assert_eq!(canon.len(), expected.len());
        let expected_canon = Polygon::new(expected.to_vec()).rotated_to_canonical_start();
        for (a, b) in canon.vertices().iter().zip(expected_canon.vertices()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn fully_inside_polygon_is_idempotent() {
        let poly = square(3.0);
        let once = SutherlandHodgmanClip::new(poly.clone(), window()).execute();
        assert_eq!(once.polygon, poly);
        assert!(once.intersections.is_empty());

        let twice = SutherlandHodgmanClip::new(once.polygon.clone(), window()).execute();
        assert_eq!(twice.polygon, once.polygon);
    }

    #[test]
    fn oversized_square_clips_to_window() {
        let out = SutherlandHodgmanClip::new(square(10.0), window()).execute();
        assert_vertices_eq(
            &out.polygon,
            &[
                Point2::new(-5.0, -5.0),
                Point2::new(5.0, -5.0),
                Point2::new(5.0, 5.0),
                Point2::new(-5.0, 5.0),
            ],
        );
        assert_relative_eq!(out.polygon.signed_area().abs(), 100.0);

        // Each of the four passes crosses the boundary twice. The Bottom
        // and Top passes contribute the four result corners; the Left and
        // Right passes record points on the extended edge lines.
        assert_eq!(out.intersections.len(), 8);
        let corners = &out.intersections[4..];
        for expected in [
            Point2::new(5.0, -5.0),
            Point2::new(-5.0, -5.0),
            Point2::new(5.0, 5.0),
            Point2::new(-5.0, 5.0),
        ] {
            assert!(corners
                .iter()
                .any(|p| (p.x - expected.x).abs() < 1e-9 && (p.y - expected.y).abs() < 1e-9));
        }
    }

    #[test]
    fn entirely_outside_polygon_clips_to_empty() {
        let poly = Polygon::new(vec![
            Point2::new(7.0, 7.0),
            Point2::new(9.0, 7.0),
            Point2::new(8.0, 9.0),
        ]);
        let out = SutherlandHodgmanClip::new(poly, window()).execute();
        assert!(out.polygon.is_empty());
    }

    #[test]
    fn empty_input_stays_empty() {
        let out = SutherlandHodgmanClip::new(Polygon::empty(), window()).execute();
        assert!(out.polygon.is_empty());
        assert!(out.intersections.is_empty());
    }

    #[test]
    fn partial_overlap_triangle() {
        // Triangle poking out of the right side.
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 2.0),
            Point2::new(0.0, 4.0),
        ]);
        let out = SutherlandHodgmanClip::new(poly, window()).execute();
        assert!(!out.polygon.is_empty());
        let w = window();
        for v in out.polygon.vertices() {
            assert!(w.contains(v));
        }
        // Crossings of the two slanted edges with x = 5, in walk order.
        assert_eq!(out.intersections.len(), 2);
        assert_relative_eq!(out.intersections[0].x, 5.0);
        assert_relative_eq!(out.intersections[0].y, 2.75);
        assert_relative_eq!(out.intersections[1].x, 5.0);
        assert_relative_eq!(out.intersections[1].y, 1.25);
    }

    #[test]
    fn convex_vertex_count_is_bounded() {
        // Convex subject against the rectangular window: at most n + 4
        // vertices survive.
        let hexagon = Polygon::new(vec![
            Point2::new(8.0, 0.0),
            Point2::new(4.0, 7.0),
            Point2::new(-4.0, 7.0),
            Point2::new(-8.0, 0.0),
            Point2::new(-4.0, -7.0),
            Point2::new(4.0, -7.0),
        ]);
        let n = hexagon.len();
        let out = SutherlandHodgmanClip::new(hexagon, window()).execute();
        assert!(out.polygon.len() <= n + 4);
    }

    #[test]
    fn clip_order_does_not_change_final_polygon() {
        let poly = Polygon::new(vec![
            Point2::new(-7.0, -2.0),
            Point2::new(2.0, -8.0),
            Point2::new(8.0, 1.0),
            Point2::new(0.0, 7.0),
        ]);
        let window = window();

        let mut reference: Option<Polygon> = None;
        let orders = [
            [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top],
            [Edge::Top, Edge::Bottom, Edge::Right, Edge::Left],
            [Edge::Bottom, Edge::Left, Edge::Top, Edge::Right],
        ];
        for order in orders {
            let mut vertices = poly.vertices().to_vec();
            let mut unused = Vec::new();
            for edge in order {
                vertices = clip_against_edge(&vertices, edge, &window, &mut unused);
            }
            let result = Polygon::new(vertices);
            match &reference {
                None => reference = Some(result),
                Some(expected) => assert_vertices_eq(&result, expected.vertices()),
            }
        }
    }
}
