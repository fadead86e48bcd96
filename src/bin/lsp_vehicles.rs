use anyhow::{Context, Result};
use colored::Colorize;
use solid_principles::logging;
use solid_principles::vehicles::{service_fleet, Car, ElectricCar, EnginePowered, Vehicle};
use solid_principles::DemoConfig;
use std::env;
use std::path::{Path, PathBuf};

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    DemoConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config: {:?}", path))
}

fn main() -> Result<()> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    colored::control::set_override(config.use_colors());
    logging::init(config.use_colors());

    println!("{}", "=== Engine capability ===".bold());
    let mut car = Car::new();
    car.start_engine();
    car.stop_engine();

    // ElectricCar has no EnginePowered impl, so `ElectricCar.start_engine()`
    // is rejected by the compiler instead of silently doing nothing.
    let electric = ElectricCar;
    println!("{} {:?} is a Vehicle without an engine", "note:".yellow(), electric);

    println!("\n{}", "=== Servicing the fleet ===".bold());
    let mut fleet: Vec<Box<dyn EnginePowered>> = vec![Box::new(Car::new()), Box::new(Car::new())];
    service_fleet(&mut fleet);

    println!("\n{}", "=== Garage ===".bold());
    let garage: Vec<Box<dyn Vehicle>> = vec![Box::new(car), Box::new(electric)];
    for vehicle in &garage {
        println!("  {:?}", vehicle);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/solid.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), DemoConfig::default());
    }
}
