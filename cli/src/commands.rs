pub mod abstract_factory;
pub mod factory_method;

use clap::{ArgAction, Parser, Subcommand};
use creational_core::abstract_factory::Brand;

#[derive(Parser)]
#[command(name = "abstract-factory")]
#[command(about = "Furnish houses and editors from coordinated product families.")]
pub struct AbstractFactoryLine {
    #[command(subcommand)]
    pub command: Option<AbstractFactoryDemo>,

    /// Do not print a blank line after each demonstration
    #[arg(long, global = true)]
    pub no_separator: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum AbstractFactoryDemo {
    /// Furnish one house per brand and list its appliances
    #[command(alias = "h")]
    Houses {
        /// Only furnish houses of these brands, in the order given
        #[arg(short, long = "brand", value_name = "BRAND")]
        brands: Vec<Brand>,
    },
    /// Open a PHP, an HTML and a JS editor
    #[command(alias = "e")]
    Editors,
}

impl Default for AbstractFactoryDemo {
    fn default() -> Self {
        AbstractFactoryDemo::Houses { brands: Vec::new() }
    }
}

#[derive(Parser)]
#[command(name = "factory-method")]
#[command(about = "Let each creator decide which product it builds.")]
pub struct FactoryMethodLine {
    #[command(subcommand)]
    pub command: Option<FactoryMethodDemo>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FactoryMethodDemo {
    /// Plant a yellow and a red rose garden
    #[default]
    #[command(alias = "r")]
    Roses,
    /// Every flower creates its own fertiliser
    #[command(alias = "f")]
    Flowers,
    /// Shrubs fall back to general fertiliser unless they override it
    #[command(alias = "s")]
    Shrubs,
    /// Trees are asked for a fertiliser by name
    #[command(alias = "t")]
    Trees,
    /// Flowers, shrubs and trees in one run
    #[command(alias = "all")]
    Variations,
}

impl AbstractFactoryLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn demo(&self) -> AbstractFactoryDemo {
        self.command.clone().unwrap_or_default()
    }
}

/// The requested brands, or every brand when none were named.
pub fn house_brands(requested: &[Brand]) -> Vec<Brand> {
    if requested.is_empty() {
        Brand::ALL.to_vec()
    } else {
        requested.to_vec()
    }
}

impl FactoryMethodLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn demo(&self) -> FactoryMethodDemo {
        self.command.unwrap_or_default()
    }
}
