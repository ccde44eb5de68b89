use crate::core::{ExtentSeriesOptions, ExtentSet, RawExtent, normalize_extents};

/// One extent series: host records, options and the normalized result.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentSeries {
    options: ExtentSeriesOptions,
    raw: Vec<RawExtent>,
    extents: ExtentSet,
}

impl ExtentSeries {
    /// Binds records to options and runs a normalization pass.
    #[must_use]
    pub fn new(options: ExtentSeriesOptions, raw: Vec<RawExtent>) -> Self {
        let extents = normalize_extents(&raw, &options);
        Self {
            options,
            raw,
            extents,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ExtentSeriesOptions {
        &self.options
    }

    #[must_use]
    pub fn raw(&self) -> &[RawExtent] {
        &self.raw
    }

    #[must_use]
    pub fn extents(&self) -> &ExtentSet {
        &self.extents
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.options.show
    }

    pub(super) fn set_options(&mut self, options: ExtentSeriesOptions) {
        self.options = options;
        self.renormalize();
    }

    pub(super) fn set_raw(&mut self, raw: Vec<RawExtent>) {
        self.raw = raw;
        self.renormalize();
    }

    fn renormalize(&mut self) {
        self.extents = normalize_extents(&self.raw, &self.options);
    }
}
