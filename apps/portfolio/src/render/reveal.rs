/// A section becomes visible once its top edge is within this fraction of
/// the viewport height. The page script uses the same value.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

/// One-way visibility flags for the page sections.
///
/// A flag flips to visible the first time its section's top edge is at or
/// above `REVEAL_VIEWPORT_FRACTION * viewport_height` and never flips back.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    /// State right after the page loads: every section is assumed to span at
    /// least one viewport, so section `i` starts `i` viewports down and only
    /// the first one is in view.
    pub fn at_load(sections: usize) -> Self {
        let mut tracker = Self::new(sections);
        let tops: Vec<f64> = (0..sections).map(|i| i as f64).collect();
        tracker.evaluate(&tops, 1.0);
        tracker
    }

    /// Applies one scroll observation. `tops[i]` is the distance from the
    /// viewport top to section `i`'s top edge; extra entries are ignored.
    /// Returns how many sections were newly revealed.
    pub fn evaluate(&mut self, tops: &[f64], viewport_height: f64) -> usize {
        let threshold = viewport_height * REVEAL_VIEWPORT_FRACTION;
        let mut newly = 0;
        for (flag, &top) in self.revealed.iter_mut().zip(tops) {
            if !*flag && top <= threshold {
                *flag = true;
                newly += 1;
            }
        }
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}
