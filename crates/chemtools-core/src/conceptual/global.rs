use super::ConceptualError;
use super::energies::ThreePointEnergies;
use tracing::warn;

fn check_electrons(n: f64) -> Result<(), ConceptualError> {
    if !(n >= 0.0) {
        return Err(ConceptualError::NegativeElectrons(n));
    }
    Ok(())
}

fn check_order(order: u32, min: u32) -> Result<(), ConceptualError> {
    if order < min {
        return Err(ConceptualError::InvalidOrder { order, min });
    }
    Ok(())
}

/// A global energy model `E(N)` interpolated through three energies, and the
/// reactivity descriptors defined in terms of it.
///
/// Implementors provide the unchecked model primitives; the checked
/// evaluation methods and all descriptors are derived from them.
pub trait GlobalTool {
    fn energies(&self) -> &ThreePointEnergies;

    /// Number of electrons that minimizes the model energy; may be infinite.
    fn n_max(&self) -> f64;

    /// `E(N)` without argument checks. Must handle `N = f64::INFINITY`.
    fn evaluate(&self, n: f64) -> f64;

    /// The `order`-th derivative `dE/dN` without argument checks.
    fn evaluate_derivative(&self, n: f64, order: u32) -> f64;

    /// Inverts `mu = dE/dN` for the number of electrons.
    fn n_from_chemical_potential(&self, mu: f64) -> Result<f64, ConceptualError>;

    fn n0(&self) -> f64 {
        self.energies().n0()
    }

    /// Model energy at `n` electrons.
    ///
    /// Logs a warning when `n` lies outside the interpolation interval
    /// `[N0 - 1, N0 + 1]`.
    fn energy(&self, n: f64) -> Result<f64, ConceptualError> {
        check_electrons(n)?;
        let n0 = self.n0();
        if !(n0 - 1.0..=n0 + 1.0).contains(&n) {
            warn!(
                "Energy evaluated for N={} outside of interpolation region [{}, {}].",
                n,
                n0 - 1.0,
                n0 + 1.0
            );
        }
        Ok(self.evaluate(n))
    }

    fn energy_derivative(&self, n: f64, order: u32) -> Result<f64, ConceptualError> {
        check_electrons(n)?;
        check_order(order, 1)?;
        let n0 = self.n0();
        if !(n0 - 1.0..=n0 + 1.0).contains(&n) {
            warn!(
                "Energy derivative evaluated for N={} outside of interpolation region [{}, {}].",
                n,
                n0 - 1.0,
                n0 + 1.0
            );
        }
        Ok(self.evaluate_derivative(n, order))
    }

    /// `E(N_max)`.
    fn energy_limit(&self) -> f64 {
        self.evaluate(self.n_max())
    }

    fn ionization_potential(&self) -> f64 {
        self.energies().minus() - self.energies().zero()
    }

    fn electron_affinity(&self) -> f64 {
        self.energies().zero() - self.energies().plus()
    }

    fn chemical_potential(&self) -> f64 {
        self.evaluate_derivative(self.n0(), 1)
    }

    fn electronegativity(&self) -> f64 {
        -self.chemical_potential()
    }

    fn chemical_hardness(&self) -> f64 {
        self.evaluate_derivative(self.n0(), 2)
    }

    fn softness(&self) -> f64 {
        1.0 / self.chemical_hardness()
    }

    /// Derivative of order `order + 1` at `N0`; `order` starts at 2.
    fn hyper_hardness(&self, order: u32) -> Result<f64, ConceptualError> {
        check_order(order, 2)?;
        Ok(self.evaluate_derivative(self.n0(), order + 1))
    }

    /// Energy lowering from `N0` to `N_max`.
    fn electrophilicity(&self) -> f64 {
        self.energies().zero() - self.energy_limit()
    }

    fn nucleofugality(&self) -> f64 {
        self.energy_limit() - self.energies().plus()
    }

    fn electrofugality(&self) -> f64 {
        self.energies().minus() - self.energy_limit()
    }

    /// `Omega(N) = E(N) - mu(N) N`.
    fn grand_potential(&self, n: f64) -> Result<f64, ConceptualError> {
        check_electrons(n)?;
        if n.is_infinite() {
            return Ok(self.evaluate(n));
        }
        Ok(self.evaluate(n) - self.evaluate_derivative(n, 1) * n)
    }

    /// Derivatives of the grand potential with respect to `mu`, expressed
    /// through the energy derivatives at `n`. Orders 1 to 5 are supported.
    fn grand_potential_derivative(&self, n: f64, order: u32) -> Result<f64, ConceptualError> {
        check_electrons(n)?;
        check_order(order, 1)?;
        let d = |k: u32| self.evaluate_derivative(n, k);
        let value = match order {
            1 => -n,
            2 => -1.0 / d(2),
            3 => d(3) / d(2).powi(3),
            4 => d(4) / d(2).powi(4) - 3.0 * d(3).powi(2) / d(2).powi(5),
            5 => {
                d(5) / d(2).powi(5) - 10.0 * d(3) * d(4) / d(2).powi(6)
                    + 15.0 * d(3).powi(3) / d(2).powi(7)
            }
            _ => return Err(ConceptualError::UnsupportedOrder(order)),
        };
        Ok(value)
    }

    fn grand_potential_mu(&self, mu: f64) -> Result<f64, ConceptualError> {
        self.grand_potential(self.n_from_chemical_potential(mu)?)
    }

    fn grand_potential_mu_derivative(&self, mu: f64, order: u32) -> Result<f64, ConceptualError> {
        self.grand_potential_derivative(self.n_from_chemical_potential(mu)?, order)
    }

    /// Negated grand potential derivative of order `order + 1` at `N0`; `order` starts at 2.
    fn hyper_softness(&self, order: u32) -> Result<f64, ConceptualError> {
        check_order(order, 2)?;
        Ok(-self.grand_potential_derivative(self.n0(), order + 1)?)
    }
}
