//! "vert" text format.
//!
//! ```text
//! <numberOfComponents>
//! <numberOfVertices_1>
//! <x> <y>          (numberOfVertices_1 lines)
//! <numberOfVertices_2>
//! ...
//! ```
//!
//! Lines are trimmed; fields split on runs of whitespace. Anything after the
//! last declared component is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::types::{CurveCollection, CurveComponent, Point2};
use crate::error::{FormatError, FormatErrorKind};

/// Line source that tracks the 1-based number of the last line handed out.
struct Lines<I> {
    inner: I,
    line: usize,
}

impl<I> Lines<I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    fn new(inner: I) -> Self {
        Self { inner, line: 0 }
    }

    fn next_line(&mut self, on_eof: FormatErrorKind) -> Result<String, FormatError> {
        match self.inner.next() {
            Some(line) => {
                self.line += 1;
                Ok(line?)
            }
            None => Err(FormatError::syntax(self.line + 1, on_eof, "")),
        }
    }

    fn next_count(&mut self, on_eof: FormatErrorKind) -> Result<usize, FormatError> {
        let raw = self.next_line(on_eof)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|_| FormatError::syntax(self.line, FormatErrorKind::InvalidCount, &raw))
    }

    fn next_vertex(&mut self) -> Result<Point2, FormatError> {
        let raw = self.next_line(FormatErrorKind::UnexpectedEof)?;
        let mut parts = raw.split_whitespace();
        let (xs, ys) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(FormatError::syntax(
                    self.line,
                    FormatErrorKind::InvalidVertex,
                    &raw,
                ))
            }
        };
        let x = self.coordinate(xs, &raw)?;
        let y = self.coordinate(ys, &raw)?;
        Ok(Point2::new(x, y))
    }

    fn coordinate(&self, token: &str, raw: &str) -> Result<f64, FormatError> {
        let v: f64 = token
            .parse()
            .map_err(|_| FormatError::syntax(self.line, FormatErrorKind::InvalidNumber, raw))?;
        if !v.is_finite() {
            return Err(FormatError::syntax(self.line, FormatErrorKind::NonFinite, raw));
        }
        Ok(v)
    }
}

/// Parse a collection from any buffered reader.
pub fn read_collection<R: BufRead>(reader: R) -> Result<CurveCollection, FormatError> {
    let mut lines = Lines::new(reader.lines());
    let n_components = lines.next_count(FormatErrorKind::Empty)?;
    // Counts come from untrusted input; cap the up-front reservation.
    let mut components = Vec::with_capacity(n_components.min(1024));
    for _ in 0..n_components {
        let n_vertices = lines.next_count(FormatErrorKind::UnexpectedEof)?;
        let mut vertices = Vec::with_capacity(n_vertices.min(1 << 16));
        for _ in 0..n_vertices {
            vertices.push(lines.next_vertex()?);
        }
        components.push(CurveComponent::new(vertices));
    }
    Ok(CurveCollection::new(components))
}

/// Parse a collection from an in-memory string.
pub fn parse_str(src: &str) -> Result<CurveCollection, FormatError> {
    read_collection(src.as_bytes())
}

/// Open and parse a ".vert" file.
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<CurveCollection, FormatError> {
    let file = File::open(path.as_ref())?;
    read_collection(BufReader::new(file))
}

/// The "vert" layout of a collection; the single source for both serializers.
struct VertText<'a>(&'a CurveCollection);

impl std::fmt::Display for VertText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0.len())?;
        for component in self.0 {
            writeln!(f, "{}", component.len())?;
            for p in component.vertices() {
                writeln!(f, "{} {}", p.x, p.y)?;
            }
        }
        Ok(())
    }
}

/// Write the exact inverse layout of `read_collection`.
///
/// Coordinates use `f64`'s shortest round-trip representation.
pub fn write_collection<W: Write>(
    collection: &CurveCollection,
    mut writer: W,
) -> std::io::Result<()> {
    write!(writer, "{}", VertText(collection))?;
    writer.flush()
}

/// Serialize to a `String`.
pub fn to_vert_string(collection: &CurveCollection) -> String {
    VertText(collection).to_string()
}

/// Create (or truncate) `path` and write the collection to it.
pub fn save_collection<P: AsRef<Path>>(
    collection: &CurveCollection,
    path: P,
) -> std::io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_collection(collection, BufWriter::new(file))
}
