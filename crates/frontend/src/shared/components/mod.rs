pub mod badge;
pub mod stat_counter;

/// Visual tone shared by badges and counters (drives colour modifier
/// classes only, never behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn as_class(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}
