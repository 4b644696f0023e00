mod frontpages;
mod transcripts;

#[cfg(test)]
mod tests;

pub use frontpages::run_frontpages;
pub use transcripts::run_transcripts;

/// What happened across one batch run. Individual failures are logged and
/// counted; they never abort the batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output files written.
    pub written: usize,
    /// Items skipped with nothing to summarize (empty documents).
    pub skipped: usize,
    /// Items that failed lookup, fetch, summarization, or local I/O.
    pub failed: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.written + self.skipped + self.failed
    }
}
