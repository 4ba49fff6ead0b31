use genbook::convert::Conversion;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match Conversion::default().run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("conversion failed: {err}");
            ExitCode::FAILURE
        }
    }
}
