use crate::config::RadiusConfig;

/// Linear map from a title count to a marker radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl RadiusScale {
    pub fn new(domain: (f64, f64), range: (f64, f64), clamp: bool) -> Self {
        Self { domain, range, clamp }
    }

    /// Unclamped linear extrapolation outside the domain unless `clamp` is set.
    pub fn scale(&self, count: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if d0 == d1 {
            return r0;
        }

        let radius = r0 + (count - d0) / (d1 - d0) * (r1 - r0);
        if self.clamp {
            radius.clamp(r0.min(r1), r0.max(r1))
        } else {
            radius
        }
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self::from(&RadiusConfig::default())
    }
}

impl From<&RadiusConfig> for RadiusScale {
    fn from(config: &RadiusConfig) -> Self {
        Self::new(
            (config.domain[0], config.domain[1]),
            (config.range[0], config.range[1]),
            config.clamp,
        )
    }
}
