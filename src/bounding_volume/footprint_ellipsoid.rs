use crate::bounding_volume::Footprint;
use crate::math::GridColumn;
use crate::shape::Ellipsoid;

impl Ellipsoid {
    /// Computes the footprint of the column offsets scanned around the center of this ellipsoid.
    ///
    /// This is the full rectangle `[-rx, rx] × [-rz, rz]`, without any pruning by the
    /// ellipse the ellipsoid actually projects onto.
    #[inline]
    pub fn local_footprint(&self) -> Footprint {
        let rx = i32::from(self.radii.x);
        let rz = i32::from(self.radii.z);

        Footprint::new(GridColumn::new(-rx, -rz), GridColumn::new(rx, rz))
    }

    /// Computes the world-space footprint of this ellipsoid.
    ///
    /// Columns that would fall outside of the representable grid are clipped.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        let rx = i32::from(self.radii.x);
        let rz = i32::from(self.radii.z);
        let (x, z) = (self.center.x, self.center.z);

        Footprint::new(
            GridColumn::new(x.saturating_sub(rx), z.saturating_sub(rz)),
            GridColumn::new(x.saturating_add(rx), z.saturating_add(rz)),
        )
    }
}
