#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    tasktui::cli::main()
}
