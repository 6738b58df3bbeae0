/// The outermost context and the root cause of an error
///
/// Some errors already render their sources in their own message, so the
/// full chain would repeat them.
pub fn summarize(error: &anyhow::Error) -> String {
    let top = error.to_string();
    match error.root_cause().to_string() {
        root if top.contains(&root) => top,
        root => format!("{}: {}", top, root),
    }
}

/// Print an error and its chain of causes to stderr
pub fn print_backtrace(error: anyhow::Error) {
    for (i, cause) in error.chain().enumerate() {
        if i > 0 {
            eprintln!();
            eprintln!("because");
            eprint!("  ");
        }
        eprintln!("{}", cause);
    }
}
