use super::*;

pub fn verify_and_exit() -> ! {
    let config = verify();
    println!("endpoint: {}", config.endpoint);
    println!("everything checked out");
    exit(0);
}

pub fn verify() -> Config {
    fn try_get<F, T>(
        path: Result<PathBuf, anyhow::Error>,
        kind: &str,
        mut handle: F,
    ) -> anyhow::Result<T>
    where
        F: FnMut(&Path) -> anyhow::Result<T>,
    {
        path.with_context(|| format!("cannot find {} file path", kind))
            .and_then(|path| {
                handle(&path).with_context(|| {
                    format!("cannot verify {} file at\n--> {}", kind, path.display())
                })
            })
    }

    let config = try_get(
        Directories::config().map(|path| path.join(CONFIG_FILE)),
        "configuration",
        |path| Config::load_or_default(&path),
    );

    config.unwrap_or_exit(|err| crate::util::print_backtrace(err))
}
