use crate::Row;

mod logging;
pub use logging::LoggingPresenter;

mod writer;
pub use writer::WriterPresenter;

/// Something that can show the result of a filter pass
///
/// After every recompute exactly one of `render` or `render_empty_state` is
/// called. `render` is never handed an empty slice.
pub trait Presenter {
    /// Show these rows, in order
    fn render(&mut self, rows: &[Row<'_>]) -> anyhow::Result<()>;

    /// Show the placeholder for when nothing matched
    fn render_empty_state(&mut self, message: &str) -> anyhow::Result<()>;

    /// Show that the users could not be loaded at all
    fn render_failure(&mut self, reason: &str) -> anyhow::Result<()>;
}
