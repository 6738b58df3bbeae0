use super::*;

/// Traces every render call before handing it to the inner presenter
pub struct LoggingPresenter<P: Presenter> {
    inner: P,
}

impl<P: Presenter> LoggingPresenter<P> {
    pub fn new(presenter: P) -> Self {
        Self { inner: presenter }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Presenter> Presenter for LoggingPresenter<P> {
    fn render(&mut self, rows: &[Row<'_>]) -> anyhow::Result<()> {
        log::trace!(
            "render {} row(s), first: {:?}",
            rows.len(),
            rows.first().map(|row| row.primary)
        );
        self.inner.render(rows)
    }

    fn render_empty_state(&mut self, message: &str) -> anyhow::Result<()> {
        log::trace!("render empty state: {}", message);
        self.inner.render_empty_state(message)
    }

    fn render_failure(&mut self, reason: &str) -> anyhow::Result<()> {
        log::trace!("render failure: {}", reason);
        self.inner.render_failure(reason)
    }
}
