use std::process::ExitCode;

fn main() -> ExitCode {
    cutcube_rs::init_logging();

    match cutcube_rs::cli::run(std::env::args().skip(1)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
