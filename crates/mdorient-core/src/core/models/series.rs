/// One row of an orientation series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    /// Frame time in picoseconds.
    pub time_ps: f64,
    /// Angle to the reference axis in degrees; NaN marks a degenerate frame.
    pub angle_deg: f64,
}

/// Time-ordered (time, angle) pairs, one per input frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrientationSeries {
    samples: Vec<OrientationSample>,
}

impl OrientationSeries {
    pub fn new(samples: Vec<OrientationSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[OrientationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrientationSample> {
        self.samples.iter()
    }

    /// Number of samples carrying the NaN sentinel.
    pub fn degenerate_count(&self) -> usize {
        self.samples.iter().filter(|s| s.angle_deg.is_nan()).count()
    }
}

impl<'a> IntoIterator for &'a OrientationSeries {
    type Item = &'a OrientationSample;
    type IntoIter = std::slice::Iter<'a, OrientationSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl FromIterator<OrientationSample> for OrientationSeries {
    fn from_iter<I: IntoIterator<Item = OrientationSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
