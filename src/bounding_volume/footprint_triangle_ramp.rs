use crate::bounding_volume::Footprint;
use crate::math::GridColumn;
use crate::shape::TriangleRamp;

impl TriangleRamp {
    /// Computes the footprint of this ramp, i.e., the bounding rectangle of the
    /// projection of its triangle onto the `(x, z)` plane.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        let [a, b, c] = self.projected_vertices();

        Footprint::new(
            GridColumn::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            GridColumn::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }
}
