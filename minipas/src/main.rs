use std::process::ExitCode;

use minipas_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    minipas_driver::run(&argument)
}
