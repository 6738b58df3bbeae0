use usersearch::config::{self, Directories};
use usersearch::{args, Input, LoggingPresenter, Screen, Status, WriterPresenter};
use usersearch::{DataSource, FileSource, HttpSource};

use std::io::Write as _;
use tokio::io::AsyncBufReadExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // this uses reverse order (least specific to most specific)
    // the last one will always override previous ones
    let envs = &[
        Directories::config()?.join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    config::load_env_from(envs);
    alto_logger::init(alto_logger::Style::MultiLine, Default::default())?;

    let args::Args {
        config,
        query,
        file,
    } = args::handle_args();

    let source: Box<dyn DataSource> = match file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(&config.endpoint)?),
    };
    log::info!("loading users from {}", source.describe());

    let presenter = LoggingPresenter::new(WriterPresenter::new(std::io::stdout(), &config.title));
    let mut screen = Screen::load(&*source, presenter, &config.empty_message).await;

    if let Some(query) = query {
        if let Status::Failed(..) = screen.status() {
            screen.refresh()?;
            std::process::exit(1)
        }
        return screen.search(query);
    }

    screen.refresh()?;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&config.placeholder)?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Event(event) => screen.handle(event)?,
        }
    }

    log::info!("done searching");
    Ok(())
}

fn prompt(placeholder: &str) -> anyhow::Result<()> {
    let out = std::io::stdout();
    let mut out = out.lock();
    write!(out, "{}> ", placeholder)?;
    out.flush().map_err(Into::into)
}
