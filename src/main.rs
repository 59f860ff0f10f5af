use std::{fs::File, process::ExitCode, sync::Mutex, thread};

use player_form::{app::App, io::sys};
use tracing_subscriber::EnvFilter;

/// Where logs go, if anywhere. The terminal is taken up by the form, so they can't go to stdout.
const LOG_VAR: &str = "PLAYER_FORM_LOG";

fn init_logging() {
    let Some(path) = std::env::var_os(LOG_VAR) else {
        return;
    };
    let file = match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("couldn't open log file {:?}: {}", path, e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let (iosys, mut iorun) = match sys::load() {
        Ok(loaded) => loaded,
        Err(errors) => {
            eprintln!("failed to load any IO system:");
            for (name, e) in errors {
                eprintln!("  {}: {}", name, e);
            }
            return ExitCode::FAILURE;
        }
    };
    let handle = thread::spawn(move || App::new(iosys).run());
    iorun.run();
    // the terminal is only restored once the runner's gone
    drop(iorun);
    match handle.join() {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "form stopped");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!("the form thread panicked");
            ExitCode::FAILURE
        }
    }
}
