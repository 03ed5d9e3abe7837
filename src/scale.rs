use crate::error::Error;

/// A linear mapping from a continuous data domain to a pixel range.
///
/// The range may be given in either pixel order, so a vertical axis can
/// invert by mapping an increasing domain onto a decreasing range. Values
/// outside the domain extrapolate; callers wanting clamped output must
/// filter upstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Create a scale mapping `domain` values onto `range` pixels.
    ///
    /// Fails with `Error::InvalidDomain` when the domain is degenerate
    /// (equal bounds) or either bound is non-finite, since both make the
    /// interpolation undefined.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Result<LinearScale, Error> {
        if !domain[0].is_finite() || !domain[1].is_finite() {
            return Err(Error::InvalidDomain(format!(
                "domain bounds must be finite, got [{}, {}]",
                domain[0], domain[1]
            )));
        }
        if domain[0] == domain[1] {
            return Err(Error::InvalidDomain(format!(
                "domain bounds must differ, got [{}, {}]",
                domain[0], domain[1]
            )));
        }
        Ok(LinearScale { domain, range })
    }

    /// Map a domain value to its pixel offset.
    pub fn scale(&self, value: f64) -> f64 {
        let proportion = (value - self.domain[0]) / (self.domain[1] - self.domain[0]);
        (self.range[1] - self.range[0]) * proportion + self.range[0]
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }
}
