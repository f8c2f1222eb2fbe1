//! Ring and collection types.

use nalgebra::Vector2;

/// A 2D point; positions and unit vectors share the representation.
pub type Point2 = Vector2<f64>;

/// One closed polygonal ring. Vertex order fixes the traversal direction.
///
/// Vertices are only replaced wholesale (`replace_vertices`), never edited in
/// place, so a reader between flow steps sees either the old or the new ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveComponent {
    vertices: Vec<Point2>,
}

impl CurveComponent {
    #[inline]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Swap in a complete new vertex sequence; returns the previous one.
    #[inline]
    pub fn replace_vertices(&mut self, vertices: Vec<Point2>) -> Vec<Point2> {
        std::mem::replace(&mut self.vertices, vertices)
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
}

/// Ordered components from one source; order matters only for addressing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveCollection {
    pub components: Vec<CurveComponent>,
}

impl CurveCollection {
    #[inline]
    pub fn new(components: Vec<CurveComponent>) -> Self {
        Self { components }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CurveComponent> {
        self.components.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveComponent> {
        self.components.iter()
    }

    /// Total vertex count across components.
    pub fn vertex_count(&self) -> usize {
        self.components.iter().map(CurveComponent::len).sum()
    }
}

impl FromIterator<CurveComponent> for CurveCollection {
    fn from_iter<I: IntoIterator<Item = CurveComponent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CurveCollection {
    type Item = &'a CurveComponent;
    type IntoIter = std::slice::Iter<'a, CurveComponent>;
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
