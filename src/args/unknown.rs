use super::*;

pub fn command(cmd: &str) -> ! {
    eprintln!("unknown subcommand: {}", cmd);
    exit(1);
}
