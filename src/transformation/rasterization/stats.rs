/// Counters describing the work done by one rasterization.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RasterizationStats {
    /// The number of footprint columns scanned.
    pub scanned_columns: u64,
    /// The number of individual inclusion tests performed.
    pub inclusion_tests: u64,
    /// The number of spans handed to the sink.
    pub emitted_spans: u64,
}
