use crate::User;
use futures::future::BoxFuture;

mod http;
pub use http::HttpSource;

mod file;
pub use file::FileSource;

pub type UsersFut<'a> = BoxFuture<'a, anyhow::Result<Vec<User>>>;

/// Where the full user list comes from
///
/// This is called exactly once, before any filtering happens.
pub trait DataSource {
    fn fetch(&self) -> UsersFut<'_>;

    /// A short description used in logs
    fn describe(&self) -> String;
}
