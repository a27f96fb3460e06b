use std::process::ExitCode;

fn main() -> ExitCode {
    match chat_export_splitter::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
