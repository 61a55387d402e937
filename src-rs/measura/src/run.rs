//! Runs a parsed command.

use anstream::println;
use measura::{
    BigQuantity,
    builtins::UnitRegistry,
    expr,
    format::{Config, FormatService},
    shared::error::{AsMeasuraError, MeasuraError},
};

use crate::{
    command::{BinaryArgs, CliCommand, Commands},
    print_list,
};

/// Runs the command, printing its output to stdout.
pub fn run(cli: &CliCommand) -> Result<(), MeasuraError> {
    let service = format_service(cli)?;
    let registry = UnitRegistry::new();

    match &cli.command {
        Commands::Convert { quantity, to } => {
            let quantity = parse_quantity(&registry, &quantity.magnitude, &quantity.unit)?;
            let unit = expr::parse_unit(&registry, to).map_err(to_error)?;
            let converted = quantity.to(&unit).map_err(to_error)?;
            print_quantity(&service, &converted);
        }
        Commands::Add(args) => {
            let (lhs, rhs) = parse_operands(&registry, args)?;
            print_quantity(&service, &lhs.checked_add(&rhs).map_err(to_error)?);
        }
        Commands::Sub(args) => {
            let (lhs, rhs) = parse_operands(&registry, args)?;
            print_quantity(&service, &lhs.checked_sub(&rhs).map_err(to_error)?);
        }
        Commands::Mul(args) => {
            let (lhs, rhs) = parse_operands(&registry, args)?;
            print_quantity(&service, &lhs.checked_mul(&rhs).map_err(to_error)?);
        }
        Commands::Div(args) => {
            let (lhs, rhs) = parse_operands(&registry, args)?;
            print_quantity(&service, &lhs.checked_div(&rhs).map_err(to_error)?);
        }
        Commands::Inverse(args) => {
            let quantity = parse_quantity(&registry, &args.magnitude, &args.unit)?;
            print_quantity(&service, &quantity.checked_inverse().map_err(to_error)?);
        }
        Commands::Units => print_list::units(&service),
        Commands::Prefixes => print_list::prefixes(),
        Commands::Formats => print_list::formats(&service),
    }

    Ok(())
}

fn format_service(cli: &CliCommand) -> Result<FormatService, MeasuraError> {
    let mut config = Config::new();

    if let Some(name) = &cli.unit_format {
        config = config.with_unit_format(name);
    }

    if let Some(name) = &cli.quantity_format {
        config = config.with_quantity_format(name);
    }

    FormatService::new(&config).map_err(to_error)
}

fn parse_quantity(
    registry: &UnitRegistry,
    magnitude: &str,
    unit: &str,
) -> Result<BigQuantity, MeasuraError> {
    let magnitude = expr::parse_magnitude(magnitude).map_err(to_error)?;
    let unit = expr::parse_unit(registry, unit).map_err(to_error)?;

    Ok(BigQuantity::from_number(magnitude, unit))
}

fn parse_operands(
    registry: &UnitRegistry,
    args: &BinaryArgs,
) -> Result<(BigQuantity, BigQuantity), MeasuraError> {
    let lhs = parse_quantity(registry, &args.lhs_magnitude, &args.lhs_unit)?;
    let rhs = parse_quantity(registry, &args.rhs_magnitude, &args.rhs_unit)?;

    Ok((lhs, rhs))
}

fn print_quantity(service: &FormatService, quantity: &BigQuantity) {
    tracing::debug!(?quantity, "printing result");
    println!("{}", service.quantity_format().format(quantity));
}

#[expect(clippy::needless_pass_by_value, reason = "this is passed to `map_err`")]
fn to_error(error: impl AsMeasuraError) -> MeasuraError {
    MeasuraError::from_error(&error)
}
