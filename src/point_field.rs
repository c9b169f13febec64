//! Generated point buffers.

use crate::Vec3;

/// Positions and colors of a generated helix.
///
/// `positions[i]` and `colors[i]` describe the same point. The two buffers
/// are only ever produced together by the generator and replaced together by
/// the store, so they always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointField {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl PointField {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, position: Vec3, color: Vec3) {
        self.positions.push(position);
        self.colors.push(color);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the field has no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Point positions in generation order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Point colors, RGB in `[0, 1]`, in generation order.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Iterate `(position, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions.iter().copied().zip(self.colors.iter().copied())
    }

    /// Positions as tightly packed `f32` triples, ready for a vertex buffer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as tightly packed `f32` triples, ready for a vertex buffer.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Axis-aligned bounds of all positions, or `None` for an empty field.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.positions.split_first()?;
        let bounds = rest.iter().fold(
            Bounds { min: *first, max: *first },
            |b, p| Bounds { min: b.min.min(*p), max: b.max.max(*p) },
        );
        Some(bounds)
    }

    /// Extent along the helix axis (max y - min y). Zero for an empty field.
    pub fn height(&self) -> f32 {
        self.bounds().map_or(0.0, |b| b.size().y)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointField {
        let mut field = PointField::with_capacity(3);
        field.push(Vec3::new(1.0, -2.0, 0.0), Vec3::X);
        field.push(Vec3::new(-1.0, 4.0, 3.0), Vec3::Y);
        field.push(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        field
    }

    #[test]
    fn test_buffers_stay_paired() {
        let field = sample();
        assert_eq!(field.len(), 3);
        assert_eq!(field.positions().len(), field.colors().len());
        let pairs: Vec<_> = field.iter().collect();
        assert_eq!(pairs[1], (Vec3::new(-1.0, 4.0, 3.0), Vec3::Y));
    }

    #[test]
    fn test_byte_views_are_packed_f32_triples() {
        let field = sample();
        assert_eq!(field.position_bytes().len(), 3 * 3 * 4);
        assert_eq!(field.color_bytes().len(), 3 * 3 * 4);
        let floats: &[f32] = bytemuck::cast_slice(field.position_bytes());
        assert_eq!(&floats[3..6], &[-1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_bounds_and_height() {
        let field = sample();
        let bounds = field.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 3.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(field.height(), 6.0);
    }

    #[test]
    fn test_empty_field() {
        let field = PointField::default();
        assert!(field.is_empty());
        assert!(field.bounds().is_none());
        assert_eq!(field.height(), 0.0);
    }
}
