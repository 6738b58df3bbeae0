pub mod args;
pub mod config;

mod filter;
pub use filter::{FilterEngine, Mode};

pub mod presenter;
pub use presenter::{LoggingPresenter, Presenter, WriterPresenter};

mod screen;
pub use screen::{Event, Input, Screen, Status};

pub mod source;
pub use source::{DataSource, FileSource, HttpSource};

mod user;
pub use user::{Company, Row, User};

mod util;
