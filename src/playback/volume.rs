/// Normalised output volume, always inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VolumeLevel(f64);

impl VolumeLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MIN);
        }
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Parses a slider value. Unparseable input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().map(Self::new)
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(0.8)
    }
}

impl From<f64> for VolumeLevel {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}
