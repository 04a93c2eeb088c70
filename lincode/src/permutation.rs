use std::{fmt, ops::Index};

use crate::error::ECCError;

/// A bijection on `0..len`, used to reorder the columns of a [`crate::BitMatrix`]
///
/// `permutation[i]` names the original column that moves into position `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Wraps `indices` as a permutation, checking that every index in `0..indices.len()` occurs once.
    ///
    /// # Errors
    ///
    /// If `indices` is not a bijection on `0..indices.len()`
    pub fn new(indices: Vec<usize>) -> Result<Self, ECCError> {
        let mut seen = vec![false; indices.len()];
        for &i in &indices {
            if i >= indices.len() || seen[i] {
                return Err(ECCError::InvalidPermutation(indices));
            }
            seen[i] = true;
        }
        Ok(Permutation(indices))
    }

    pub fn identity(len: usize) -> Self {
        Permutation((0..len).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// Returns the positional inverse, so that `inverse[self[i]] == i`
    ///
    /// Applying `self` and then `self.inverse()` to the columns of a matrix gives back the original matrix.
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.len()];
        for (i, &j) in self.0.iter().enumerate() {
            inverse[j] = i;
        }
        Permutation(inverse)
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(value: Permutation) -> Self {
        value.0
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, j) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", j)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

    #[test]
    fn rejects_non_bijections() {
        assert!(Permutation::new(vec![0, 2, 1]).is_ok());
        assert_eq!(
            Permutation::new(vec![0, 0, 1]),
            Err(ECCError::InvalidPermutation(vec![0, 0, 1]))
        );
        assert!(Permutation::new(vec![0, 3, 1]).is_err());
        assert!(Permutation::new(vec![]).is_ok());
    }

    #[test]
    fn inverse_of_known_permutation() {
        let p = Permutation::new(vec![1, 3, 0, 2, 4]).unwrap();
        assert_eq!(p.inverse().as_slice(), &[2, 0, 3, 1, 4]);
        assert!(!p.is_identity());
        assert!(Permutation::identity(5).is_identity());
    }

    #[test]
    fn random_inverse() {
        let mut rng = SmallRng::seed_from_u64(1);
        for len in [1, 2, 7, 40] {
            let mut indices: Vec<usize> = (0..len).collect();
            indices.shuffle(&mut rng);
            let p = Permutation::new(indices).unwrap();
            let inv = p.inverse();
            for i in 0..len {
                assert_eq!(inv[p[i]], i);
                assert_eq!(p[inv[i]], i);
            }
            assert_eq!(inv.inverse(), p);
        }
    }

    #[test]
    fn display() {
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        assert_eq!(p.to_string(), "2 0 1");
    }
}
