use std::fmt;

use serde::{Deserialize, Serialize};

/// The two parameters of y = slope·x + intercept.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> LinearModel {
        LinearModel { slope, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {} * x + {}", self.slope, self.intercept)
    }
}
