use std::io;

use creational_cli::commands::{
    AbstractFactoryDemo, AbstractFactoryLine, abstract_factory, house_brands,
};
use creational_cli::terminal;
use creational_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = AbstractFactoryLine::parse_args();

    terminal::init_logging(commands.verbose);

    let cfg = Config {
        no_separator: commands.no_separator,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands.demo() {
        AbstractFactoryDemo::Houses { brands } => {
            abstract_factory::houses(&house_brands(&brands), &cfg, &mut out)
        }
        AbstractFactoryDemo::Editors => abstract_factory::editors(&cfg, &mut out),
    }
}
