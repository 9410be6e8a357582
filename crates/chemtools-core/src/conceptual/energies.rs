use super::ConceptualError;

/// Energies at `N0 - 1`, `N0` and `N0 + 1` electrons.
///
/// `N0` may be fractional; only the spacing of the three points is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointEnergies {
    n0: f64,
    minus: f64,
    zero: f64,
    plus: f64,
}

impl ThreePointEnergies {
    /// Builds the input from `(number of electrons, energy)` pairs in any order.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, ConceptualError> {
        if points.len() != 3 {
            return Err(ConceptualError::WrongPointCount(points.len()));
        }
        if let Some(&(n, _)) = points.iter().find(|(n, _)| !(*n >= 0.0)) {
            return Err(ConceptualError::NegativeElectrons(n));
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        let n0 = sorted[1].0;
        if n0 < 1.0 {
            return Err(ConceptualError::ReferenceTooSmall(n0));
        }
        let counts: Vec<f64> = sorted.iter().map(|(n, _)| *n).collect();
        if counts != [n0 - 1.0, n0, n0 + 1.0] {
            return Err(ConceptualError::NotConsecutive(counts));
        }

        Ok(Self {
            n0,
            minus: sorted[0].1,
            zero: sorted[1].1,
            plus: sorted[2].1,
        })
    }

    pub fn n0(&self) -> f64 {
        self.n0
    }

    /// `E(N0 - 1)`.
    pub fn minus(&self) -> f64 {
        self.minus
    }

    /// `E(N0)`.
    pub fn zero(&self) -> f64 {
        self.zero
    }

    /// `E(N0 + 1)`.
    pub fn plus(&self) -> f64 {
        self.plus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_sorted_by_electron_count() {
        let energies = ThreePointEnergies::new(&[(2.0, -1.625), (3.0, -1.96774193), (1.0, -1.0)])
            .unwrap();
        assert_eq!(energies.n0(), 2.0);
        assert_eq!(energies.minus(), -1.0);
        assert_eq!(energies.zero(), -1.625);
        assert_eq!(energies.plus(), -1.96774193);
    }

    #[test]
    fn fractional_reference_counts_are_allowed() {
        let energies = ThreePointEnergies::new(&[(6.5, -6.99), (7.5, -7.23), (5.5, -6.69)]).unwrap();
        assert_eq!(energies.n0(), 6.5);
    }

    #[test]
    fn rejects_invalid_point_sets() {
        assert_eq!(
            ThreePointEnergies::new(&[(1.0, 0.0), (2.0, 0.0)]),
            Err(ConceptualError::WrongPointCount(2))
        );
        assert_eq!(
            ThreePointEnergies::new(&[(-1.0, -14.0), (0.0, -15.0), (1.0, -14.4)]),
            Err(ConceptualError::NegativeElectrons(-1.0))
        );
        assert_eq!(
            ThreePointEnergies::new(&[(0.8, -15.0), (0.0, -14.9), (1.5, -14.0)]),
            Err(ConceptualError::ReferenceTooSmall(0.8))
        );
        assert!(matches!(
            ThreePointEnergies::new(&[(5.0, -15.0), (4.5, -14.9), (5.5, -14.0)]),
            Err(ConceptualError::NotConsecutive(_))
        ));
        assert!(matches!(
            ThreePointEnergies::new(&[(4.0, -15.0), (2.0, -14.9), (6.0, -14.0)]),
            Err(ConceptualError::NotConsecutive(_))
        ));
        assert!(matches!(
            ThreePointEnergies::new(&[(f64::NAN, -15.0), (2.0, -14.9), (3.0, -14.0)]),
            Err(ConceptualError::NegativeElectrons(_))
        ));
    }
}
