use super::Span;

/// The receiver of the spans emitted by a rasterizer.
///
/// Spans are handed over one at a time, in emission order. A sink is where
/// spans turn into actual world mutations; rasterizers themselves never touch
/// any world state.
pub trait SpanSink {
    /// Receives the next emitted span.
    fn accept(&mut self, span: Span);
}

impl SpanSink for Vec<Span> {
    #[inline]
    fn accept(&mut self, span: Span) {
        self.push(span)
    }
}

impl<S: SpanSink + ?Sized> SpanSink for &mut S {
    #[inline]
    fn accept(&mut self, span: Span) {
        (**self).accept(span)
    }
}

/// A span sink calling a closure on every span.
///
/// Built with [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

impl<F: FnMut(Span)> SpanSink for FnSink<F> {
    #[inline]
    fn accept(&mut self, span: Span) {
        (self.0)(span)
    }
}

/// Creates a span sink calling `f` on every emitted span.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxfill3d::math::{GridPoint, Vector};
/// use voxfill3d::shape::Ellipsoid;
/// use voxfill3d::transformation::rasterization::{self, TailDescriptor};
///
/// let mut cells = 0;
/// let sphere = Ellipsoid::sphere(GridPoint::new(0, 64, 0), 2);
/// let tail = TailDescriptor::new("stone");
/// let _ = rasterization::rasterize_ellipsoid(
///     &sphere,
///     &tail,
///     &mut rasterization::from_fn(|span| cells += span.height()),
/// );
/// assert!(cells > 0);
/// # }
/// ```
#[inline]
pub fn from_fn<F: FnMut(Span)>(f: F) -> FnSink<F> {
    FnSink(f)
}
