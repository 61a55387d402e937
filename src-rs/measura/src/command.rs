use clap::{Args, Parser, Subcommand};

/// Measura CLI
#[derive(Parser)]
#[command(name = "measura")]
#[command(version, about = "Exact unit-aware arithmetic", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Name of the unit format used for output
    #[arg(long, global = true, value_name = "FORMAT")]
    pub unit_format: Option<String>,

    /// Name of the quantity format used for output
    #[arg(long, global = true, value_name = "FORMAT")]
    pub quantity_format: Option<String>,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Print errors in debug format
    #[arg(long, global = true)]
    pub print_debug: bool,

    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a quantity to another unit
    Convert {
        #[command(flatten)]
        quantity: QuantityArgs,

        /// The unit to convert to
        #[arg(long, value_name = "UNIT")]
        to: String,
    },
    /// Add two quantities
    Add(BinaryArgs),
    /// Subtract the second quantity from the first
    Sub(BinaryArgs),
    /// Multiply two quantities
    Mul(BinaryArgs),
    /// Divide the first quantity by the second
    Div(BinaryArgs),
    /// Print the reciprocal of a quantity, truncated to an integer
    Inverse(QuantityArgs),
    /// List the builtin units
    Units,
    /// List the builtin prefixes
    Prefixes,
    /// List the available formats
    Formats,
}

/// A quantity given on the command line
#[derive(Args)]
pub struct QuantityArgs {
    /// An integer like `42` or a ratio like `7/2`
    #[arg(value_name = "MAGNITUDE", allow_hyphen_values = true)]
    pub magnitude: String,

    /// A unit like `mΩ` or `kg*m^2/s^3`
    #[arg(value_name = "UNIT")]
    pub unit: String,
}

/// Two quantities given on the command line
#[derive(Args)]
pub struct BinaryArgs {
    /// Magnitude of the first quantity
    #[arg(value_name = "MAGNITUDE", allow_hyphen_values = true)]
    pub lhs_magnitude: String,

    /// Unit of the first quantity
    #[arg(value_name = "UNIT")]
    pub lhs_unit: String,

    /// Magnitude of the second quantity
    #[arg(value_name = "MAGNITUDE", allow_hyphen_values = true)]
    pub rhs_magnitude: String,

    /// Unit of the second quantity
    #[arg(value_name = "UNIT")]
    pub rhs_unit: String,
}
