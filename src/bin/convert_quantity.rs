//! Utility to convert a single quantity between units
//!
//! Usage: convert_quantity <quantity> <from> <to> [--drink]

use cookbook_units::conversion::ConversionTable;
use cookbook_units::units::Unit;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cookbook_units=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let drink = args.iter().any(|a| a == "--drink");
    args.retain(|a| a != "--drink");

    let [quantity, from, to] = args.as_slice() else {
        eprintln!("Usage: convert_quantity <quantity> <from> <to> [--drink]");
        std::process::exit(2);
    };

    let quantity: f64 = quantity.parse()?;
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;

    let table = if drink {
        ConversionTable::drink()
    } else {
        ConversionTable::food()
    };

    let result = table.convert(quantity, from, to)?;
    println!("{} {} = {} {}", quantity, from, result, to);

    Ok(())
}
