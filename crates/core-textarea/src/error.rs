use core_display::DisplayError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextAreaError {
    /// Neither initial text nor a non-zero `max_glyphs` was supplied.
    #[error("text area needs initial text or a non-zero max_glyphs")]
    MissingCapacity,
    /// The new text has more visible glyphs than the area has tile slots.
    #[error("text needs {required} glyph tiles but capacity is {capacity}")]
    CapacityOverflow { required: usize, capacity: usize },
    /// The line spacing is non-finite, or moves the pen past pixel range over the text's lines.
    #[error("line spacing {line_spacing} cannot lay out {newlines} line breaks")]
    LineSpacingOutOfRange { line_spacing: f64, newlines: usize },
    #[error(transparent)]
    Display(#[from] DisplayError),
}
