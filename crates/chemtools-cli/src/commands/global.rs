use crate::cli::{EnergyModel, GlobalArgs};
use crate::error::Result;
use chemtools::conceptual::{GlobalTool, QuadraticGlobalTool, RationalGlobalTool};
use tracing::info;

pub fn run(args: GlobalArgs) -> Result<()> {
    let points: Vec<(f64, f64)> = args.energies.iter().map(|p| (p.n, p.energy)).collect();
    info!("Fitting {:?} energy model to {} point(s).", args.model, points.len());
    let tool = build_model(args.model, &points)?;
    for (name, value) in descriptors(tool.as_ref())? {
        println!("{:<24} {:>16.8}", name, value);
    }
    Ok(())
}

fn build_model(model: EnergyModel, points: &[(f64, f64)]) -> Result<Box<dyn GlobalTool>> {
    let tool: Box<dyn GlobalTool> = match model {
        EnergyModel::Quadratic => Box::new(QuadraticGlobalTool::from_points(points)?),
        EnergyModel::Rational => Box::new(RationalGlobalTool::from_points(points)?),
    };
    Ok(tool)
}

fn descriptors(tool: &dyn GlobalTool) -> Result<Vec<(&'static str, f64)>> {
    Ok(vec![
        ("N0", tool.n0()),
        ("ionization potential", tool.ionization_potential()),
        ("electron affinity", tool.electron_affinity()),
        ("chemical potential", tool.chemical_potential()),
        ("electronegativity", tool.electronegativity()),
        ("chemical hardness", tool.chemical_hardness()),
        ("softness", tool.softness()),
        ("hyper-hardness (2)", tool.hyper_hardness(2)?),
        ("N_max", tool.n_max()),
        ("E(N_max)", tool.energy_limit()),
        ("electrophilicity", tool.electrophilicity()),
        ("nucleofugality", tool.nucleofugality()),
        ("electrofugality", tool.electrofugality()),
        ("grand potential", tool.grand_potential(tool.n0())?),
    ])
}
