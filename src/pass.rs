/// Which time-of-day label a run splits lines on.
///
/// `Night` is the pass the tool exists for. `Morning` is the older twin that was
/// kept around switched off; it excludes `noon`/`night` rather than
/// `noon`/`morning`, and that asymmetry is kept exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Pass {
    #[default]
    Night,
    /// legacy pass, not used unless asked for
    Morning,
}

impl Pass {
    pub fn label(self) -> &'static str {
        match self {
            Pass::Night => "night",
            Pass::Morning => "morning",
        }
    }

    /// `left` tokens that suppress a row for this pass.
    pub fn excluded(self) -> &'static [&'static str] {
        match self {
            Pass::Night => &["noon", "morning"],
            Pass::Morning => &["noon", "night"],
        }
    }

    #[inline]
    pub fn is_excluded(self, left: &str) -> bool {
        self.excluded().contains(&left)
    }
}
