use chemcalc::cli::cli_main::run_interactive_menu;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("failed to initialize the terminal logger");
    run_interactive_menu();
}
