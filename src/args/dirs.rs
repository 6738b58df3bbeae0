use super::*;

pub fn dirs() -> ! {
    let config = get_config_path();
    println!("configuration directory is at..");
    println!("{}", config.display());
    println!();

    exit(0)
}
