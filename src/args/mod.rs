use crate::config::{Config, Directories};

use anyhow::Context as _;

use std::path::{Path, PathBuf};
use std::process::exit;

mod dirs;
mod edit;
mod init;
mod unknown;
mod verify;

static HELP_MESSAGE: &str = "
flags:
    -h, --help          prints this message
    -v, --version       prints the version
    -q, --query <text>  search once for <text> and exit
    -f, --file <path>   read the users from a json file instead of the endpoint

subcommands:
    config          opens the `usersearch.toml` in your editor
    dirs            prints the configuration directory
    init            initialize the config file
    verify          checks the config file
";

const CONFIG_FILE: &str = "usersearch.toml";

/// What the screen should do once the arguments are handled
#[derive(Debug)]
pub struct Args {
    pub config: Config,
    /// Run a single search and exit
    pub query: Option<String>,
    /// Read users from this file rather than the configured endpoint
    pub file: Option<PathBuf>,
}

pub fn handle_args() -> Args {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("usersearch. revision: {}", env!("USERSEARCH_GIT_REVISION"));
        println!("{}", HELP_MESSAGE);
        exit(0);
    }

    if args.contains(["-v", "--version"]) {
        println!(
            "{} (revision: {})",
            env!("USERSEARCH_GIT_TAG"),
            env!("USERSEARCH_GIT_REVISION")
        );
        exit(0);
    }

    let cmd = args.subcommand();

    let query = args
        .opt_value_from_str(["-q", "--query"])
        .unwrap_or_exit(|err| eprintln!("invalid --query: {}", err));

    let file = args
        .opt_value_from_str(["-f", "--file"])
        .unwrap_or_exit(|err| eprintln!("invalid --file: {}", err));

    args.finish().unwrap_or_exit(|err| {
        eprintln!("invalid arguments provided: {}", err);
    });

    let cmd = cmd
        .as_ref()
        .map(|s| s.as_deref())
        // this happens when its not valid utf-8
        .unwrap_or_exit(|err| eprintln!("cannot parse subcommand: {}", err));

    let config = match cmd {
        Some("config") => edit::config(),
        Some("dirs") => dirs::dirs(),
        Some("init") => init::init(),
        Some("verify") => verify::verify_and_exit(),
        Some(cmd) => unknown::command(cmd),
        None => verify::verify(),
    };

    Args {
        config: config.with_env(),
        query,
        file,
    }
}

fn get_config_path() -> PathBuf {
    Directories::config().unwrap_or_exit(|err| {
        eprintln!("ERROR! cannot get configuration directory: {}", err);
    })
}

trait ResultExt<T, E> {
    fn unwrap_or_exit<F>(self, quit: F) -> T
    where
        F: FnOnce(E);
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn unwrap_or_exit<F>(self, quit: F) -> T
    where
        F: FnOnce(E),
    {
        self.unwrap_or_else(|err| {
            quit(err);
            exit(1);
        })
    }
}
