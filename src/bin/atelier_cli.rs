use atelier_core::cli::shell::Shell;
use atelier_core::cli::{output, CliResult};
use atelier_core::config::ConfigManager;

fn main() {
    atelier_core::init();
    if let Err(err) = run() {
        output::error(&err);
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let data_dir = manager.data_dir(&config);
    let mut shell = Shell::new(&config, &data_dir)?;
    shell.run()
}
