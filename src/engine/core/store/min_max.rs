/// Positions holding the extreme values of a scanned candidate set.
/// Ties are kept in full, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinMaxPositions {
    pub min: Vec<usize>,
    pub max: Vec<usize>,
}

impl MinMaxPositions {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Single-pass min/max tracker shared by every backend.
///
/// A strictly smaller value restarts the min list; an equal value extends it.
/// Same for max. Nulls are ignored, and nothing is tracked until the first
/// non-null value arrives.
#[derive(Debug, Default)]
pub struct MinMaxScanner {
    extremes: Option<(f64, f64)>,
    min: Vec<usize>,
    max: Vec<usize>,
}

impl MinMaxScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, position: usize, value: Option<f64>) {
        let Some(current) = value else {
            return;
        };

        let Some((lowest, highest)) = self.extremes.as_mut() else {
            self.extremes = Some((current, current));
            self.min.push(position);
            self.max.push(position);
            return;
        };

        if current < *lowest {
            *lowest = current;
            self.min.clear();
            self.min.push(position);
        } else if current == *lowest {
            self.min.push(position);
        }

        if current > *highest {
            *highest = current;
            self.max.clear();
            self.max.push(position);
        } else if current == *highest {
            self.max.push(position);
        }
    }

    /// The extreme values seen so far, if any non-null value was observed.
    pub fn extremes(&self) -> Option<(f64, f64)> {
        self.extremes
    }

    pub fn finish(self) -> MinMaxPositions {
        MinMaxPositions {
            min: self.min,
            max: self.max,
        }
    }
}
