/// How the scoring matrix catches up after document text is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RescanMode {
    /// Rebuild the whole matrix for the grown document.
    Recompute,
    /// Append rows for the new characters only.
    #[default]
    Extend,
}

#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub rescan: RescanMode,
    /// Stop reading once an exact match is found.
    pub early_termination: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            rescan: RescanMode::default(),
            early_termination: true,
        }
    }
}
