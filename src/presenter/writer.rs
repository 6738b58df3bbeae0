use super::*;
use std::io::Write;

/// Writes rows as plain text lines
pub struct WriterPresenter<W> {
    writer: W,
    title: String,
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(writer: W, title: impl Into<String>) -> Self {
        Self {
            writer,
            title: title.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn header(&mut self, count: usize) -> anyhow::Result<()> {
        writeln!(self.writer, "{} ({})", self.title, count)?;
        Ok(())
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    fn render(&mut self, rows: &[Row<'_>]) -> anyhow::Result<()> {
        self.header(rows.len())?;
        let width = rows
            .iter()
            .map(|row| row.primary.chars().count())
            .max()
            .unwrap_or_default();

        for Row { primary, secondary } in rows {
            writeln!(self.writer, "  {:<width$}  {}", primary, secondary, width = width)?;
        }
        self.writer.flush().map_err(Into::into)
    }

    fn render_empty_state(&mut self, message: &str) -> anyhow::Result<()> {
        self.header(0)?;
        writeln!(self.writer, "  {}", message)?;
        self.writer.flush().map_err(Into::into)
    }

    fn render_failure(&mut self, reason: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.title)?;
        writeln!(self.writer, "  cannot load users: {}", reason)?;
        self.writer.flush().map_err(Into::into)
    }
}
