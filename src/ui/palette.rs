/// Brand colors
///
/// The studio identity is a deep forest ink on warm cream, with a moss
/// accent. Kept as plain constants so widgets can reference them without
/// a theme lookup.

use iced::Color;

/// Primary ink, used for headings and body text
pub const FOREST: Color = Color {
    r: 0.10,
    g: 0.20,
    b: 0.15,
    a: 1.0,
};

/// Accent green for interactive highlights
pub const MOSS: Color = Color {
    r: 0.23,
    g: 0.45,
    b: 0.32,
    a: 1.0,
};

/// Page background
pub const CREAM: Color = Color {
    r: 0.98,
    g: 0.97,
    b: 0.94,
    a: 1.0,
};

/// Card surface
pub const CARD: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Secondary text, the primary ink at reduced opacity
pub const MUTED: Color = Color {
    r: 0.10,
    g: 0.20,
    b: 0.15,
    a: 0.65,
};

/// Soft tinted fill for pills and placeholders
pub const WASH: Color = Color {
    r: 0.23,
    g: 0.45,
    b: 0.32,
    a: 0.10,
};

/// Hairline borders
pub const LINE: Color = Color {
    r: 0.10,
    g: 0.20,
    b: 0.15,
    a: 0.12,
};

/// Error accent (theme palette requires one)
pub const BRICK: Color = Color {
    r: 0.72,
    g: 0.25,
    b: 0.20,
    a: 1.0,
};
