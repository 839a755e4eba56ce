use std::path::Path;
use std::process::ExitCode;

use regression_fixture::app::{run_pipeline, INPUT_PATH, OUTPUT_PATH};

fn main() -> ExitCode {
    env_logger::init();

    match run_pipeline(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
