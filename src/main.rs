use anyhow::Result;
use clap::Parser;
use lingodeck::app::App;
use lingodeck::cli::{print_error, Cli};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(true) => return Ok(()),
        Ok(false) => {}
        Err(e) => {
            print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = lingodeck::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("lingodeck.log");

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "lingodeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(cli.launch_options())?;
    let result = app.run();

    // Unmount screens before flushing the log
    drop(app);
    drop(guard);

    result
}
