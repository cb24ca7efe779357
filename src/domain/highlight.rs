use super::config::HighlightPalette;

/// Feedback tag on the ball. Purely visual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightColor {
    #[default]
    Neutral,
    Armed,
    Launched,
}

impl HighlightColor {
    /// `0xRRGGBB` for the host material.
    pub fn rgb(self, palette: &HighlightPalette) -> u32 {
        match self {
            HighlightColor::Neutral => palette.neutral,
            HighlightColor::Armed => palette.armed,
            HighlightColor::Launched => palette.launched,
        }
    }
}
