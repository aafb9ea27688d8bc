// src/progress.rs
/// Progress reporting for a run (fetch → extract → save).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the sample is drawn, with the number of rows to extract.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one sampled record has been extracted.
    fn item_done(&mut self, _id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
