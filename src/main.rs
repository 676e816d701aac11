use clap::Parser;
use env_logger::Builder;
use mandel_explorer::{format_presets, CliArgs, CliController, TerminalPresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    Builder::from_default_env().filter_level(args.log_level_filter()).init();

    if args.list_presets {
        print!("{}", format_presets());
        return Ok(());
    }

    let request = args.to_request()?;
    let mut controller = CliController::new(TerminalPresenter::stdout());

    controller.generate(&request)?;
    controller.present()?;

    Ok(())
}
