/// Equal-width histogram binning.
///
/// Bins are half-open `[a, b)` except the last one, which also takes values
/// equal to the upper edge. Samples below the first edge, above the last, or
/// not finite are counted in `out_of_range` and not binned.
use crate::config::BinSpec;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: BinSpec,
    pub counts: Vec<u64>,
    pub out_of_range: u64,
}

impl Histogram {
    /// An all-zero histogram. Fails if the bin specification is invalid.
    pub fn empty(bins: BinSpec) -> Result<Self> {
        bins.validate()?;
        Ok(Self {
            bins,
            counts: vec![0; bins.count],
            out_of_range: 0,
        })
    }

    /// Bin every sample.
    pub fn from_samples(bins: BinSpec, samples: &[f64]) -> Result<Self> {
        let mut hist = Self::empty(bins)?;
        for &sample in samples {
            hist.add(sample);
        }
        Ok(hist)
    }

    /// Add one sample.
    pub fn add(&mut self, sample: f64) {
        match self.bin_index(sample) {
            Some(i) => self.counts[i] += 1,
            None => self.out_of_range += 1,
        }
    }

    /// Index of the bin `sample` belongs to.
    pub fn bin_index(&self, sample: f64) -> Option<usize> {
        let BinSpec { start, end, count } = self.bins;
        if !sample.is_finite() || sample < start || sample > end {
            return None;
        }
        if sample == end {
            return Some(count - 1);
        }

        let width = self.bins.width();
        let mut idx = (((sample - start) / width).floor() as usize).min(count - 1);

        // The division can land one bin off near an edge; settle against the
        // edge values themselves.
        if idx > 0 && sample < self.edge(idx) {
            idx -= 1;
        } else if idx + 1 < count && sample >= self.edge(idx + 1) {
            idx += 1;
        }
        Some(idx)
    }

    /// Lower edge of bin `i` (`i == count` gives the upper edge of the range).
    pub fn edge(&self, i: usize) -> f64 {
        if i >= self.bins.count {
            self.bins.end
        } else {
            self.bins.start + self.bins.width() * i as f64
        }
    }

    /// `(lower, upper, count)` for each bin, in order.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.edge(i), self.edge(i + 1), c))
    }

    /// Number of binned samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest count among bins that start below `limit`.
    pub fn max_count_below(&self, limit: f64) -> u64 {
        self.iter_bins()
            .filter(|&(lo, _, _)| lo < limit)
            .map(|(_, _, c)| c)
            .max()
            .unwrap_or(0)
    }
}
