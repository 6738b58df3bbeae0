use super::*;

pub fn config() -> ! {
    run_editor_for(CONFIG_FILE);
}

fn run_editor_for(file: &str) -> ! {
    let file = get_config_path().join(file);
    let file = file.to_string_lossy();
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| default_editor().into());
    std::process::Command::new(&editor)
        .arg(file.as_ref())
        .status()
        .unwrap_or_exit(|err| eprintln!("error running `{}`: {}", editor, err));
    exit(0)
}

fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}
