use super::ConceptualError;
use super::energies::ThreePointEnergies;
use super::global::GlobalTool;
use tracing::debug;

/// `E(N) = a + b N + c N^2` through three energies.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticGlobalTool {
    energies: ThreePointEnergies,
    a: f64,
    b: f64,
    c: f64,
}

impl QuadraticGlobalTool {
    /// Fits the model; fails unless the energies are convex in `N`.
    pub fn new(energies: ThreePointEnergies) -> Result<Self, ConceptualError> {
        let n0 = energies.n0();
        let (minus, zero, plus) = (energies.minus(), energies.zero(), energies.plus());

        let c = (plus - 2.0 * zero + minus) / 2.0;
        if !(c > 0.0) {
            return Err(ConceptualError::NotConvex { curvature: c });
        }
        let b = (plus - minus) / 2.0 - 2.0 * c * n0;
        let a = zero - b * n0 - c * n0 * n0;
        debug!(a, b, c, n0, "Fitted quadratic energy model.");

        Ok(Self { energies, a, b, c })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, ConceptualError> {
        Self::new(ThreePointEnergies::new(points)?)
    }

    /// `[a, b, c]`.
    pub fn params(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

impl GlobalTool for QuadraticGlobalTool {
    fn energies(&self) -> &ThreePointEnergies {
        &self.energies
    }

    fn n_max(&self) -> f64 {
        -self.b / (2.0 * self.c)
    }

    fn evaluate(&self, n: f64) -> f64 {
        self.a + self.b * n + self.c * n * n
    }

    fn evaluate_derivative(&self, n: f64, order: u32) -> f64 {
        match order {
            1 => self.b + 2.0 * self.c * n,
            2 => 2.0 * self.c,
            _ => 0.0,
        }
    }

    fn n_from_chemical_potential(&self, mu: f64) -> Result<f64, ConceptualError> {
        let n = (mu - self.b) / (2.0 * self.c);
        if !(n >= 0.0) {
            return Err(ConceptualError::ChemicalPotentialOutOfRange(mu));
        }
        Ok(n)
    }

    /// Closed form `(IP - 3 EA)^2 / (8 (IP - EA))`.
    fn nucleofugality(&self) -> f64 {
        let ip = self.ionization_potential();
        let ea = self.electron_affinity();
        (ip - 3.0 * ea).powi(2) / (8.0 * (ip - ea))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP: f64 = 13.59843401;
    const EA: f64 = 0.754195;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn hydrogen() -> QuadraticGlobalTool {
        QuadraticGlobalTool::from_points(&[(0.0, IP), (1.0, 0.0), (2.0, -EA)]).unwrap()
    }

    #[test]
    fn reproduces_the_three_energies() {
        let model = hydrogen();
        assert!(f64_approx_equal(model.energy(0.0).unwrap(), IP));
        assert!(f64_approx_equal(model.energy(1.0).unwrap(), 0.0));
        assert!(f64_approx_equal(model.energy(2.0).unwrap(), -EA));
    }

    #[test]
    fn global_descriptors_of_hydrogen() {
        let model = hydrogen();
        assert!(f64_approx_equal(model.ionization_potential(), IP));
        assert!(f64_approx_equal(model.electron_affinity(), EA));
        assert!(f64_approx_equal(model.chemical_potential(), -(IP + EA) / 2.0));
        assert!(f64_approx_equal(model.electronegativity(), (IP + EA) / 2.0));
        assert!(f64_approx_equal(model.chemical_hardness(), IP - EA));
        assert!(f64_approx_equal(model.softness(), 1.0 / (IP - EA)));
        assert!(f64_approx_equal(model.hyper_hardness(2).unwrap(), 0.0));

        let n_max = 1.0 + (IP + EA) / (2.0 * (IP - EA));
        assert!(f64_approx_equal(model.n_max(), n_max));
        let electrophilicity = (IP + EA).powi(2) / (8.0 * (IP - EA));
        assert!(f64_approx_equal(model.electrophilicity(), electrophilicity));
        let nucleofugality = (IP - 3.0 * EA).powi(2) / (8.0 * (IP - EA));
        assert!(f64_approx_equal(model.nucleofugality(), nucleofugality));
        let electrofugality = (3.0 * IP - EA).powi(2) / (8.0 * (IP - EA));
        assert!(f64_approx_equal(model.electrofugality(), electrofugality));
    }

    #[test]
    fn grand_potential_follows_the_legendre_transform() {
        let model = hydrogen();
        let [a, b, c] = model.params();
        assert!(f64_approx_equal(model.grand_potential(1.0).unwrap(), a - c));
        assert!(f64_approx_equal(
            model.grand_potential_derivative(1.3, 1).unwrap(),
            -1.3
        ));
        assert!(f64_approx_equal(
            model.grand_potential_derivative(1.3, 2).unwrap(),
            -1.0 / (2.0 * c)
        ));
        assert!(f64_approx_equal(
            model.grand_potential_derivative(1.3, 3).unwrap(),
            0.0
        ));

        let mu = model.chemical_potential();
        assert!(f64_approx_equal(model.n_from_chemical_potential(mu).unwrap(), 1.0));
        assert!(f64_approx_equal(
            model.grand_potential_mu(mu).unwrap(),
            model.grand_potential(1.0).unwrap()
        ));
        assert!(f64_approx_equal(model.hyper_softness(2).unwrap(), 0.0));
        assert!(model.n_from_chemical_potential(b - 1.0).is_err());
    }

    #[test]
    fn rejects_concave_energies() {
        assert!(matches!(
            QuadraticGlobalTool::from_points(&[(4.0, -10.0), (5.0, -9.0), (6.0, -10.0)]),
            Err(ConceptualError::NotConvex { .. })
        ));
    }

    #[test]
    fn checked_evaluation_rejects_invalid_arguments() {
        let model = hydrogen();
        assert_eq!(
            model.energy(-0.5),
            Err(ConceptualError::NegativeElectrons(-0.5))
        );
        assert_eq!(
            model.energy_derivative(1.0, 0),
            Err(ConceptualError::InvalidOrder { order: 0, min: 1 })
        );
        assert_eq!(
            model.hyper_hardness(1),
            Err(ConceptualError::InvalidOrder { order: 1, min: 2 })
        );
        assert_eq!(
            model.grand_potential_derivative(1.0, 6),
            Err(ConceptualError::UnsupportedOrder(6))
        );
        assert!(model.energy(5.0).is_ok());
    }
}
