//! Wrapper type for storing per-window probabilities.

use std::ops::Deref;

/// Window probabilities for a single sequence under a profile.
///
/// Index `i` holds the probability of the window starting at position `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scores {
    data: Vec<f64>,
}

impl Scores {
    /// Create a new collection from an array of scores.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Find the position with the highest score.
    ///
    /// Exact ties resolve to the leftmost position, which keeps argmax
    /// selection fully deterministic.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &x) in self.data.iter().enumerate() {
            match best {
                Some(b) if x <= self.data[b] => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Find the highest score.
    pub fn max(&self) -> Option<f64> {
        self.argmax().map(|i| self.data[i])
    }
}

impl Deref for Scores {
    type Target = [f64];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<f64>> for Scores {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn argmax_is_leftmost_on_ties() {
        let scores = Scores::new(vec![0.1, 0.5, 0.3, 0.5, 0.2]);
        assert_eq!(scores.argmax(), Some(1));
        assert_eq!(scores.max(), Some(0.5));
        assert_eq!(Scores::new(Vec::new()).argmax(), None);
    }

    #[test]
    fn argmax_handles_all_equal() {
        let scores = Scores::new(vec![0.25; 4]);
        assert_eq!(scores.argmax(), Some(0));
    }
}
