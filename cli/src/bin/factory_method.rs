use std::io;

use creational_cli::commands::{FactoryMethodLine, factory_method};
use creational_cli::terminal;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = FactoryMethodLine::parse_args();

    terminal::init_logging(commands.verbose);

    let demo = commands.demo();
    info!(?demo, "starting factory method demo");

    let stdout = io::stdout();
    factory_method::run(demo, &mut stdout.lock())
}
