use crossterm::style::Color;

/// Design tokens for the cascada terminal UI.
///
/// Design constraints:
/// - Only the semantic colors below (`colors::*`)
/// - All glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    pub const ACCENT: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Branch nodes: collapsed rows point into the next column; the row that
    // currently spawns it is marked open.
    pub const BRANCH: &str = "▶";
    pub const BRANCH_OPEN: &str = "▼";

    // Column expansion affordance.
    pub const MORE: &str = "+";
    pub const LESS: &str = "-";

    // Cursor row.
    pub const POINTER: &str = ">";

    pub const WARNING: &str = "⚠";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const BRANCH: &str = ">";
    pub const BRANCH_OPEN: &str = "v";

    pub const MORE: &str = "+";
    pub const LESS: &str = "-";

    pub const POINTER: &str = ">";

    pub const WARNING: &str = "[WARN]";
    pub const ELLIPSIS: &str = "~";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Glyph set resolved once from the terminal capabilities.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub unicode: bool,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub branch: &'static str,
    pub branch_open: &'static str,
    pub more: &'static str,
    pub less: &'static str,
    pub pointer: &'static str,
    pub warning: &'static str,
    pub ellipsis: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                unicode,
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                branch: icons::BRANCH,
                branch_open: icons::BRANCH_OPEN,
                more: icons::MORE,
                less: icons::LESS,
                pointer: icons::POINTER,
                warning: icons::WARNING,
                ellipsis: icons::ELLIPSIS,
                horizontal: borders::HORIZONTAL,
                vertical: borders::VERTICAL,
            }
        } else {
            Self {
                unicode,
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                branch: icons_ascii::BRANCH,
                branch_open: icons_ascii::BRANCH_OPEN,
                more: icons_ascii::MORE,
                less: icons_ascii::LESS,
                pointer: icons_ascii::POINTER,
                warning: icons_ascii::WARNING,
                ellipsis: icons_ascii::ELLIPSIS,
                horizontal: borders_ascii::HORIZONTAL,
                vertical: borders_ascii::VERTICAL,
            }
        }
    }
}
