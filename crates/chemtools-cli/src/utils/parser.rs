use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid energy point '{0}'. Expected 'N=E' (e.g., '2=-1.625').")]
    InvalidEnergyPointFormat(String),

    #[error("Invalid {component} '{value}' in energy point '{point}'.")]
    InvalidNumber {
        component: &'static str,
        value: String,
        point: String,
    },
}

/// An energy at a given number of electrons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyPoint {
    pub n: f64,
    pub energy: f64,
}

pub fn parse_energy_point(s: &str) -> Result<EnergyPoint, ParseError> {
    let Some((n, energy)) = s.split_once('=') else {
        return Err(ParseError::InvalidEnergyPointFormat(s.to_string()));
    };
    let number = |component: &'static str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                component,
                value: value.to_string(),
                point: s.to_string(),
            })
    };
    Ok(EnergyPoint {
        n: number("number of electrons", n)?,
        energy: number("energy", energy)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_points() {
        assert_eq!(
            parse_energy_point("2=-1.625"),
            Ok(EnergyPoint {
                n: 2.0,
                energy: -1.625
            })
        );
        assert_eq!(
            parse_energy_point(" 6.5 = -6.99363057"),
            Ok(EnergyPoint {
                n: 6.5,
                energy: -6.99363057
            })
        );
    }

    #[test]
    fn rejects_invalid_points() {
        assert_eq!(
            parse_energy_point("2:-1.625"),
            Err(ParseError::InvalidEnergyPointFormat("2:-1.625".to_string()))
        );
        assert!(matches!(
            parse_energy_point("two=-1.625"),
            Err(ParseError::InvalidNumber {
                component: "number of electrons",
                ..
            })
        ));
        assert!(matches!(
            parse_energy_point("2="),
            Err(ParseError::InvalidNumber {
                component: "energy",
                ..
            })
        ));
    }
}
