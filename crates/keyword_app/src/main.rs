mod app;
mod cli;
mod effects;
mod logging;
mod settings;
mod ui;

use keyword_logging::kw_info;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse_cli();
    let settings = settings::resolve(&cli)?;

    if cli.print_config {
        println!("{}", settings::to_ron(&settings)?);
        return Ok(());
    }

    logging::initialize(cli.log);
    kw_info!("Starting keyword_app against {}", settings.base_url);
    app::run(&settings)
}
