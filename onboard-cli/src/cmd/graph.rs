use std::path::Path;

use crate::exit_codes;
use crate::input::read_flow;
use crate::output::OutputFormat;
use crate::OutputArgs;

pub fn graph_cmd(path: &Path) -> i32 {
    let output = OutputArgs {
        format: OutputFormat::Text,
        quiet: false,
    };
    match read_flow(path, &output) {
        Ok(parsed) => {
            print!("{}", parsed.flow.to_dot());
            exit_codes::SUCCESS
        }
        Err(code) => code,
    }
}
