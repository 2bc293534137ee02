//! Sparse sampled solution returned by the driver.

use crate::surface::Surface;

/// Stored samples of one integration run, ordered by increasing ξ
///
/// The first sample sits at the starting offset `h`; the last one is the
/// extrapolated first root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    index: f64,
    xi: Vec<f64>,
    y: Vec<[f64; 2]>,
}

impl Trajectory {
    pub(crate) fn start(index: f64, xi: f64, y: [f64; 2]) -> Self {
        Self {
            index,
            xi: vec![xi],
            y: vec![y],
        }
    }

    pub(crate) fn push(&mut self, xi: f64, y: [f64; 2]) {
        self.xi.push(xi);
        self.y.push(y);
    }

    pub(crate) fn last_xi(&self) -> f64 {
        self.xi[self.xi.len() - 1]
    }

    /// Polytropic index the trajectory was computed for
    pub fn index(&self) -> f64 {
        self.index
    }

    /// Stored ξ values
    pub fn xi(&self) -> &[f64] {
        &self.xi
    }

    /// Stored (θ, dθ/dξ) pairs, parallel to [`xi`](Self::xi)
    pub fn states(&self) -> &[[f64; 2]] {
        &self.y
    }

    /// Stored θ values
    pub fn theta(&self) -> impl Iterator<Item = f64> + '_ {
        self.y.iter().map(|s| s[0])
    }

    /// Iterate over (ξ, state) samples
    pub fn iter(&self) -> impl Iterator<Item = (f64, [f64; 2])> + '_ {
        self.xi.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.xi.len()
    }

    /// Always false: a trajectory holds at least its starting sample
    pub fn is_empty(&self) -> bool {
        self.xi.is_empty()
    }

    /// Terminal sample (ξ₁, state)
    pub fn last(&self) -> (f64, [f64; 2]) {
        let i = self.xi.len() - 1;
        (self.xi[i], self.y[i])
    }

    /// Extrapolated first root ξ₁
    pub fn root(&self) -> f64 {
        self.last_xi()
    }

    /// Surface quantities at the terminal sample
    pub fn surface(&self) -> Surface {
        let (xi1, y) = self.last();
        Surface {
            index: self.index,
            xi1,
            dtheta_dxi: y[1],
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = (f64, [f64; 2]);
    type IntoIter = std::iter::Zip<
        std::iter::Copied<std::slice::Iter<'a, f64>>,
        std::iter::Copied<std::slice::Iter<'a, [f64; 2]>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.xi.iter().copied().zip(self.y.iter().copied())
    }
}
