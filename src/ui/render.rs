//! Canvas rendering for the picker panel.
//!
//! The renderer paints into a character grid sized to the viewport, placing
//! each column at the rectangle the picker's geometry computed. Keeping the
//! output a plain string keeps every visual assertion testable without a
//! terminal.

use std::collections::HashSet;
use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::node::HierarchyNode;
use crate::picker::{PanelPicker, Rect};

use super::theme::Glyphs;

/// Character grid with clipped string placement.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Place `text` at cell (x, y), clipping at every canvas edge. Wide
    /// characters occupy their display width; one that would straddle the
    /// right edge is dropped.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        let row = &mut self.cells[y as usize];
        let mut cursor = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if cursor + w > self.width as i32 {
                break;
            }
            if cursor >= 0 {
                row[cursor as usize] = ch;
                for pad in 1..w {
                    row[(cursor + pad) as usize] = ' ';
                }
            }
            cursor += w;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().collect();
            f.write_str(line.trim_end())?;
            if index + 1 < self.height {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Truncate `text` to `max` display cells, ending in `ellipsis` when cut.
pub fn fit_to_width(text: &str, max: usize, ellipsis: &str) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let ellipsis_width = ellipsis.width();
    let budget = max.saturating_sub(ellipsis_width);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Paint one trigger control: `label: caption` with an open/closed marker.
pub fn render_trigger(
    canvas: &mut Canvas,
    rect: Rect,
    label: &str,
    caption: &str,
    focused: bool,
    open: bool,
    glyphs: &Glyphs,
) {
    let pointer = if focused { glyphs.pointer } else { " " };
    let marker = if open {
        glyphs.branch_open
    } else {
        glyphs.branch
    };
    let text = if caption.is_empty() {
        label.to_string()
    } else {
        format!("{label}: {caption}")
    };
    let inner = fit_to_width(&text, (rect.width as usize).saturating_sub(4), glyphs.ellipsis);
    canvas.put_str(rect.x, rect.y, &format!("{pointer}{inner} {marker}"));
}

/// Paint every visible column of an open picker. `cursor` is the hovered
/// (column, visible-row) pair, if any.
pub fn render_panel(
    canvas: &mut Canvas,
    picker: &PanelPicker,
    roots: &[HierarchyNode],
    cursor: Option<(usize, usize)>,
    glyphs: &Glyphs,
) {
    let columns = picker.columns(roots);
    let rects = picker.column_rects(roots);
    let highlighted = picker.highlighted(roots);
    let path = picker.path().to_vec();
    let row_height = picker.layout().row_height;

    for (index, (nodes, rect)) in columns.iter().zip(rects.iter()).enumerate() {
        let visible = picker.visible_count(index, nodes.len());
        for (row, node) in nodes.iter().take(visible).enumerate() {
            let y = rect.y + row as i32 * row_height;
            let active = cursor == Some((index, row));
            let line = render_item(node, index, &path, &highlighted, active, glyphs);
            canvas.put_str(rect.x, y, &fit_to_width(&line, rect.width as usize, glyphs.ellipsis));
        }

        if picker.can_expand(nodes.len()) {
            let y = rect.y + visible as i32 * row_height;
            let affordance = if picker.is_expanded(index) {
                format!("  {}", glyphs.less)
            } else {
                format!("  {} {} more", glyphs.more, nodes.len() - visible)
            };
            canvas.put_str(rect.x, y, &affordance);
        }

        if index > 0 {
            for row in 0..rect.height {
                canvas.put_str(rect.x - 1, rect.y + row, glyphs.vertical);
            }
        }
    }
}

fn render_item(
    node: &HierarchyNode,
    column: usize,
    path: &[String],
    highlighted: &HashSet<String>,
    active: bool,
    glyphs: &Glyphs,
) -> String {
    let pointer = if active { glyphs.pointer } else { " " };
    let icon = if node.is_leaf() {
        if highlighted.contains(&node.id) {
            glyphs.selected
        } else {
            glyphs.unselected
        }
    } else if path.get(column) == Some(&node.id) {
        glyphs.branch_open
    } else {
        glyphs.branch
    };
    format!("{pointer}{icon} {}", node.label)
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(unicode: bool) -> String {
    if unicode {
        String::from(
            "[Tab] Next picker    [Enter] Open / Select    [+] Show more    [Esc] Close    [q] Quit\n\
             (Use ↑↓ to hover, →← to switch column, Space to select)",
        )
    } else {
        String::from(
            "[Tab] Next picker    [Enter] Open / Select    [+] Show more    [Esc] Close    [q] Quit\n\
             (Use j/k to hover, h/l to switch column, Space to select)",
        )
    }
}

/// Render the status bar summarizing every committed selection.
pub fn render_status_bar(location: &str, property_types: &str, filters: &[String]) -> String {
    let filters = if filters.is_empty() {
        String::from("none")
    } else {
        filters.join(" ")
    };
    format!(
        "Location: {}    Types: {}    Filters: {}",
        blank_as_dash(location),
        blank_as_dash(property_types),
        filters
    )
}

fn blank_as_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
