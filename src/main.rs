use std::process::ExitCode;

fn main() -> ExitCode {
    let code = browser_sim::execute();
    ExitCode::from(code as u8)
}
