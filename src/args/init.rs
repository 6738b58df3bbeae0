use super::*;

pub fn init() -> ! {
    let path = get_config_path().join(CONFIG_FILE);

    if path.is_file() {
        eprintln!("ERROR! configuration file already exists at..");
        println!("{}", path.display());
        println!();
        exit(1)
    }

    println!("writing configuration file to..");
    println!("{}", path.display());
    println!();

    Config::write_default(&path)
        .unwrap_or_exit(|err| eprintln!("ERROR! cannot write default configuration file: {}", err));
    exit(0)
}
