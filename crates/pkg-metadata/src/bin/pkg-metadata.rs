use std::process::ExitCode;

use pkg_metadata::main as pkg_metadata_main;

fn main() -> ExitCode {
    pkg_metadata_main(std::env::args_os())
}
