//! Color allocation for namespace groups.
//!
//! Colors are indices into a Graphviz Brewer scheme, see
//! <http://www.graphviz.org/doc/info/colors.html#brewer>.

/// Brewer color scheme used for every namespace.
pub const COLOR_SCHEME: &str = "paired10";

/// Number of colors in [`COLOR_SCHEME`].
pub const PALETTE_SIZE: u32 = 10;

/// First color index handed out (Brewer indices are 1-based).
pub const FIRST_COLOR: u32 = 1;

/// The two palette slots owned by one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Node fill color.
    pub fill: u32,
    /// Node border, edge and font color.
    pub border: u32,
}

impl ColorPair {
    /// Whether either slot lies outside the palette.
    pub fn is_exhausted(&self) -> bool {
        self.border > PALETTE_SIZE
    }
}

/// Hands out consecutive color pairs. Never fails: past the end of the
/// palette it keeps counting and the caller decides whether to warn.
#[derive(Debug, Clone)]
pub struct Palette {
    next: u32,
}

impl Palette {
    pub fn new() -> Self {
        Self { next: FIRST_COLOR }
    }

    pub fn allocate(&mut self) -> ColorPair {
        let pair = ColorPair { fill: self.next, border: self.next + 1 };
        self.next += 2;
        pair
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
