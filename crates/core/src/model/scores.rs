use thiserror::Error;

use crate::bank::{MAX_CATEGORY_SCORE, MIN_CATEGORY_SCORE};
use crate::model::category::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("{category} score {score} is outside 10..=50")]
    OutOfRange { category: Category, score: u16 },
}

/// The five category totals of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreVector {
    totals: [u16; 5],
}

impl ScoreVector {
    /// Builds a vector from externally supplied totals (e.g. a submit request).
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if any total is outside `10..=50`.
    pub fn new(sa: u16, me: u16, mo: u16, e: u16, ss: u16) -> Result<Self, ScoreError> {
        Self::from_totals([sa, me, mo, e, ss])
    }

    /// Builds a vector from totals in [`Category::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if any total is outside `10..=50`.
    pub fn from_totals(totals: [u16; 5]) -> Result<Self, ScoreError> {
        for category in Category::ALL {
            let score = totals[category.index()];
            if !(MIN_CATEGORY_SCORE..=MAX_CATEGORY_SCORE).contains(&score) {
                return Err(ScoreError::OutOfRange { category, score });
            }
        }
        Ok(Self { totals })
    }

    /// Totals computed from a complete response set are in range by construction.
    pub(crate) fn from_sums(totals: [u16; 5]) -> Self {
        Self { totals }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> u16 {
        self.totals[category.index()]
    }

    /// `(category, total)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u16)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    #[must_use]
    pub fn totals(&self) -> [u16; 5] {
        self.totals
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.totals.iter().copied().max().unwrap_or_default()
    }

    #[must_use]
    pub fn min(&self) -> u16 {
        self.totals.iter().copied().min().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_totals() {
        let err = ScoreVector::new(30, 9, 30, 30, 30).unwrap_err();
        assert_eq!(
            err,
            ScoreError::OutOfRange {
                category: Category::ManagingEmotions,
                score: 9
            }
        );
        assert!(ScoreVector::new(30, 30, 30, 30, 51).is_err());
        assert!(ScoreVector::new(10, 50, 10, 50, 10).is_ok());
    }

    #[test]
    fn accessors_follow_category_order() {
        let scores = ScoreVector::new(40, 41, 30, 20, 25).unwrap();
        assert_eq!(scores.get(Category::ManagingEmotions), 41);
        assert_eq!(scores.get(Category::Empathy), 20);
        assert_eq!(scores.max(), 41);
        assert_eq!(scores.min(), 20);
        let codes: Vec<&str> = scores.iter().map(|(c, _)| c.code()).collect();
        assert_eq!(codes, vec!["SA", "ME", "MO", "E", "SS"]);
    }
}
