use crate::cli::DescribeArgs;
use crate::error::{CliError, Result};
use chemtools::core::keys::ArchiveKey;

pub fn run(args: DescribeArgs) -> Result<()> {
    println!("{}", describe(&args.key)?);
    Ok(())
}

fn describe(key: &str) -> Result<String> {
    let key = key
        .parse::<ArchiveKey>()
        .map_err(|e| CliError::Argument(e.to_string()))?;
    let shape = key.shape();
    let location = if key.at_nuclei() {
        "nuclear positions"
    } else if shape.is_field() {
        "grid points"
    } else {
        "-"
    };
    Ok(format!(
        "key:         {}\ndescription: {}\nelement:     {}\nshape:       {}\nsampled at:  {}",
        key,
        key.describe(),
        shape.element_type(),
        shape.notation(),
        location
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_a_templated_nuclear_key() {
        let text = describe("nuc_orb_12").unwrap();
        assert!(text.contains("key:         nuc_orb_12"));
        assert!(text.contains("Orbital value for orbital index 12 at the nuclear positions"));
        assert!(text.contains("shape:       (S,)"));
        assert!(text.contains("sampled at:  nuclear positions"));
    }

    #[test]
    fn describes_a_fixed_key() {
        let text = describe("coords").unwrap();
        assert!(text.contains("Cartesian coordinates of the nuclei"));
        assert!(text.contains("sampled at:  -"));
    }

    #[test]
    fn invalid_keys_are_argument_errors() {
        assert!(matches!(describe("nuc_coords"), Err(CliError::Argument(_))));
        assert!(matches!(describe("nothing"), Err(CliError::Argument(_))));
    }
}
