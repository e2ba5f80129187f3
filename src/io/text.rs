use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::error::{InputError, Result};
use crate::geometry::{ClipWindow, Polygon, Segment};
use crate::math::Point2;

/// A parsed segment data set: the segments plus the clip window.
#[derive(Debug, Clone)]
pub struct SegmentsInput {
    /// The segments, in file order.
    pub segments: Vec<Segment>,
    /// The clip window from the trailing record.
    pub window: ClipWindow,
}

/// A parsed polygon data set: the subject polygon plus the clip window.
#[derive(Debug, Clone)]
pub struct PolygonInput {
    /// The polygon, vertices in file order.
    pub polygon: Polygon,
    /// The clip window from the trailing record.
    pub window: ClipWindow,
}

/// Whitespace token stream that tracks the token index for error reporting.
struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
            index: 0,
        }
    }

    fn next_raw(&mut self, expected: &'static str) -> Result<&'a str> {
        let token = self
            .iter
            .next()
            .ok_or(InputError::UnexpectedEof { expected })?;
        self.index += 1;
        Ok(token)
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize> {
        let token = self.next_raw(expected)?;
        token.parse().map_err(|_| {
            InputError::Malformed {
                expected,
                index: self.index,
                token: token.to_owned(),
            }
            .into()
        })
    }

    fn next_f64(&mut self, expected: &'static str) -> Result<f64> {
        let token = self.next_raw(expected)?;
        token.parse().map_err(|_| {
            InputError::Malformed {
                expected,
                index: self.index,
                token: token.to_owned(),
            }
            .into()
        })
    }

    fn next_point(&mut self) -> Result<Point2> {
        let x = self.next_f64("x coordinate")?;
        let y = self.next_f64("y coordinate")?;
        Ok(Point2::new(x, y))
    }

    fn next_window(&mut self) -> Result<ClipWindow> {
        let xmin = self.next_f64("window xmin")?;
        let ymin = self.next_f64("window ymin")?;
        let xmax = self.next_f64("window xmax")?;
        let ymax = self.next_f64("window ymax")?;
        Ok(ClipWindow::new(xmin, ymin, xmax, ymax))
    }
}

/// Parses a segment data set: `n`, then `n` records of `x1 y1 x2 y2`, then
/// the clip window record. Tokens after the window record are ignored.
///
/// # Errors
///
/// Returns `InputError::Malformed` for an unparsable token and
/// `InputError::UnexpectedEof` when the stream ends early.
pub fn parse_segments(input: &str) -> Result<SegmentsInput> {
    let mut tokens = Tokens::new(input);
    let n = tokens.next_count("segment count")?;

    let mut segments = Vec::with_capacity(n);
    for _ in 0..n {
        let a = tokens.next_point()?;
        let b = tokens.next_point()?;
        segments.push(Segment::new(a, b));
    }

    let window = tokens.next_window()?;
    Ok(SegmentsInput { segments, window })
}

/// Parses a polygon data set: `n`, then `n` records of `x y`, then the clip
/// window record. Tokens after the window record are ignored. The vertex
/// count is validated when the polygon is loaded into a scene, not here.
///
/// # Errors
///
/// Returns `InputError::Malformed` for an unparsable token and
/// `InputError::UnexpectedEof` when the stream ends early.
pub fn parse_polygon(input: &str) -> Result<PolygonInput> {
    let mut tokens = Tokens::new(input);
    let n = tokens.next_count("vertex count")?;

    let mut vertices = Vec::with_capacity(n);
    for _ in 0..n {
        vertices.push(tokens.next_point()?);
    }

    let window = tokens.next_window()?;
    Ok(PolygonInput {
        polygon: Polygon::new(vertices),
        window,
    })
}

/// Reads and parses a segment data set from a file.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be read, or a parse error
/// from [`parse_segments`].
pub fn read_segments_file<P: AsRef<Path>>(path: P) -> Result<SegmentsInput> {
    let contents = fs::read_to_string(path).map_err(InputError::from)?;
    parse_segments(&contents)
}

/// Reads and parses a polygon data set from a file.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be read, or a parse error
/// from [`parse_polygon`].
pub fn read_polygon_file<P: AsRef<Path>>(path: P) -> Result<PolygonInput> {
    let contents = fs::read_to_string(path).map_err(InputError::from)?;
    parse_polygon(&contents)
}
