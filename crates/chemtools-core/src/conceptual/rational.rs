use super::ConceptualError;
use super::energies::ThreePointEnergies;
use super::global::GlobalTool;
use tracing::debug;

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// `E(N) = (a0 + a1 N) / (1 + b1 N)` through three energies.
///
/// The energy decreases monotonically towards `a1 / b1`, so `N_max` is
/// infinite and every derivative vanishes there.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalGlobalTool {
    energies: ThreePointEnergies,
    a0: f64,
    a1: f64,
    b1: f64,
}

impl RationalGlobalTool {
    /// Fits the model; requires `E(N0-1) > E(N0) >= E(N0+1)`.
    pub fn new(energies: ThreePointEnergies) -> Result<Self, ConceptualError> {
        let n0 = energies.n0();
        let (minus, zero, plus) = (energies.minus(), energies.zero(), energies.plus());
        if !(minus > zero && zero >= plus) {
            return Err(ConceptualError::NonMonotonic { minus, zero, plus });
        }

        let b1 = -(plus - 2.0 * zero + minus)
            / ((n0 + 1.0) * plus - 2.0 * n0 * zero + (n0 - 1.0) * minus);
        let a1 = (1.0 + b1 * n0) * (plus - zero) + b1 * plus;
        let a0 = -a1 * n0 + zero * (1.0 + b1 * n0);
        if ![a0, a1, b1].iter().all(|p| p.is_finite()) {
            return Err(ConceptualError::DegenerateModel);
        }
        debug!(a0, a1, b1, n0, "Fitted rational energy model.");

        Ok(Self {
            energies,
            a0,
            a1,
            b1,
        })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, ConceptualError> {
        Self::new(ThreePointEnergies::new(points)?)
    }

    /// `[a0, a1, b1]`.
    pub fn params(&self) -> [f64; 3] {
        [self.a0, self.a1, self.b1]
    }
}

impl GlobalTool for RationalGlobalTool {
    fn energies(&self) -> &ThreePointEnergies {
        &self.energies
    }

    fn n_max(&self) -> f64 {
        f64::INFINITY
    }

    fn evaluate(&self, n: f64) -> f64 {
        if n.is_infinite() {
            return self.a1 / self.b1;
        }
        (self.a0 + self.a1 * n) / (1.0 + self.b1 * n)
    }

    fn evaluate_derivative(&self, n: f64, order: u32) -> f64 {
        if n.is_infinite() {
            return 0.0;
        }
        (-self.b1).powi(order as i32 - 1) * (self.a1 - self.a0 * self.b1) * factorial(order)
            / (1.0 + self.b1 * n).powi(order as i32 + 1)
    }

    /// Takes the root with `1 + b1 N > 0`.
    fn n_from_chemical_potential(&self, mu: f64) -> Result<f64, ConceptualError> {
        let ratio = (self.a1 - self.a0 * self.b1) / mu;
        if !(ratio >= 0.0) || !ratio.is_finite() {
            return Err(ConceptualError::ChemicalPotentialOutOfRange(mu));
        }
        let n = (ratio.sqrt() - 1.0) / self.b1;
        if !(n >= 0.0) {
            return Err(ConceptualError::ChemicalPotentialOutOfRange(mu));
        }
        Ok(n)
    }
}
