//! Colors used by the command line messages.
//!
//! - SURVEY_BLUE: Main Color

use colored::Color;

pub(crate) const SURVEY_BLUE: Color = Color::TrueColor {
    r: 87,
    g: 154,
    b: 255,
};
