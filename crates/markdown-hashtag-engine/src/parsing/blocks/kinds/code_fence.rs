#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Returns the fence kind if `line` opens or closes a fence.
    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim_end_matches(['\r', '\n']);
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// A fence is only closed by a fence line of the same kind.
    pub fn closes(open: FenceKind, sig: Option<FenceKind>) -> bool {
        sig == Some(open)
    }
}
