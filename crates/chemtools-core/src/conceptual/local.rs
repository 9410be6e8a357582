use super::ConceptualError;
use super::global::GlobalTool;
use ndarray::Array1;
use std::fmt;

/// Which Fukui function a local descriptor is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FukuiSide {
    /// Electron addition, `f+`.
    Plus,
    /// Electron removal, `f-`.
    Minus,
    /// The average `f0 = (f+ + f-) / 2`.
    Zero,
}

impl FukuiSide {
    pub const ALL: [FukuiSide; 3] = [FukuiSide::Plus, FukuiSide::Minus, FukuiSide::Zero];
}

impl fmt::Display for FukuiSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FukuiSide::Plus => "plus",
            FukuiSide::Minus => "minus",
            FukuiSide::Zero => "zero",
        };
        f.write_str(name)
    }
}

/// Local reactivity descriptors sampled at the same points as the Fukui functions.
///
/// Descriptors return `None` when the Fukui function they need is absent, and
/// the global-scaled ones also when no global tool is attached.
pub struct LocalTool<'g> {
    ff_plus: Option<Array1<f64>>,
    ff_minus: Option<Array1<f64>>,
    global: Option<&'g dyn GlobalTool>,
}

impl<'g> LocalTool<'g> {
    pub fn new(
        ff_plus: Option<Array1<f64>>,
        ff_minus: Option<Array1<f64>>,
    ) -> Result<Self, ConceptualError> {
        if let (Some(plus), Some(minus)) = (&ff_plus, &ff_minus) {
            if plus.len() != minus.len() {
                return Err(ConceptualError::FukuiLengthMismatch {
                    plus: plus.len(),
                    minus: minus.len(),
                });
            }
        }
        Ok(Self {
            ff_plus,
            ff_minus,
            global: None,
        })
    }

    pub fn with_global(mut self, global: &'g dyn GlobalTool) -> Self {
        self.global = Some(global);
        self
    }

    pub fn ff_plus(&self) -> Option<&Array1<f64>> {
        self.ff_plus.as_ref()
    }

    pub fn ff_minus(&self) -> Option<&Array1<f64>> {
        self.ff_minus.as_ref()
    }

    pub fn ff_zero(&self) -> Option<Array1<f64>> {
        let (plus, minus) = (self.ff_plus.as_ref()?, self.ff_minus.as_ref()?);
        Some((plus + minus) * 0.5)
    }

    /// `f+ - f-`.
    pub fn dual_descriptor(&self) -> Option<Array1<f64>> {
        let (plus, minus) = (self.ff_plus.as_ref()?, self.ff_minus.as_ref()?);
        Some(plus - minus)
    }

    pub fn fukui_function(&self, side: FukuiSide) -> Option<Array1<f64>> {
        match side {
            FukuiSide::Plus => self.ff_plus.clone(),
            FukuiSide::Minus => self.ff_minus.clone(),
            FukuiSide::Zero => self.ff_zero(),
        }
    }

    fn scaled(&self, side: FukuiSide, value: impl Fn(&dyn GlobalTool) -> f64) -> Option<Array1<f64>> {
        let global = self.global?;
        let fukui = self.fukui_function(side)?;
        Some(fukui * value(global))
    }

    pub fn ionization_potential(&self, side: FukuiSide) -> Option<Array1<f64>> {
        self.scaled(side, |g| g.ionization_potential())
    }

    pub fn chemical_hardness(&self, side: FukuiSide) -> Option<Array1<f64>> {
        self.scaled(side, |g| g.chemical_hardness())
    }

    pub fn softness(&self, side: FukuiSide) -> Option<Array1<f64>> {
        self.scaled(side, |g| g.softness())
    }

    pub fn electrophilicity(&self, side: FukuiSide) -> Option<Array1<f64>> {
        self.scaled(side, |g| g.electrophilicity())
    }

    pub fn nucleofugality(&self, side: FukuiSide) -> Option<Array1<f64>> {
        self.scaled(side, |g| g.nucleofugality())
    }
}
