//! Ordered record of the iterates visited by a solver.
//!
//! An [`IterateHistory`] is filled by exactly one solve call and handed back 
//! by value. Only the crate can append to it, so a history seen by a caller 
//! is immutable: index `0` is the initial point, the last entry is the final 
//! iterate.

use std::ops::Index; 


#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IterateHistory { 
    values: Vec<f64>, 
}

impl IterateHistory { 
    /// Empty history with room for `capacity` iterates. 
    pub(crate) fn with_capacity(capacity: usize) -> Self { 
        Self { values: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub(crate) fn record(&mut self, w: f64) { 
        log::trace!("iterate {:>3}: w = {w:e}", self.values.len()); 
        self.values.push(w);
    }

    pub fn as_slice(&self) -> &[f64] { &self.values }
    pub fn len(&self)      -> usize  { self.values.len() }
    pub fn is_empty(&self) -> bool   { self.values.is_empty() }
    pub fn first(&self)    -> Option<f64> { self.values.first().copied() }
    pub fn last(&self)     -> Option<f64> { self.values.last().copied() }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ { 
        self.values.iter().copied()
    }

    /// Smallest and largest iterate, or `None` if empty. 
    pub fn bounds(&self) -> Option<(f64, f64)> { 
        let first = self.first()?; 
        Some(self.iter().fold((first, first), |(lo, hi), w| (lo.min(w), hi.max(w))))
    }

    pub fn into_vec(self) -> Vec<f64> { 
        self.values
    }
}

impl Index<usize> for IterateHistory { 
    type Output = f64; 

    fn index(&self, i: usize) -> &f64 { 
        &self.values[i]
    }
}

impl AsRef<[f64]> for IterateHistory { 
    fn as_ref(&self) -> &[f64] { 
        &self.values
    }
}

impl<'a> IntoIterator for &'a IterateHistory { 
    type Item = &'a f64; 
    type IntoIter = std::slice::Iter<'a, f64>; 

    fn into_iter(self) -> Self::IntoIter { 
        self.values.iter()
    }
}

impl From<IterateHistory> for Vec<f64> { 
    fn from(history: IterateHistory) -> Self { 
        history.values
    }
}
