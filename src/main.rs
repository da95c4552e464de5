use std::process::ExitCode;

fn main() -> ExitCode {
    match geopub::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            geopub::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
