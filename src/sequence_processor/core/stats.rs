#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub read: u64,
    pub written: u64,
    pub dropped: u64,
}
