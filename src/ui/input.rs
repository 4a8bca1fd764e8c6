//! Keyboard/mouse input handling and the interactive browse loop.
//!
//! `BrowseApp` is the consumer side of the picker core: it owns the three
//! search-bar pickers (location, property type, characteristics), the shared
//! arbiter and the amenity store, and it translates terminal events into
//! picker events. Everything except `run_interactive` is headless and driven
//! directly by the tests.

use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use serde::Serialize;

use crate::amenity::{self, AmenitySet, AmenityStore, AmenityValue};
use crate::config::Config;
use crate::engine::labels_for_ids;
use crate::model::node::HierarchyNode;
use crate::picker::{
    OpenArbiter, PanelPicker, PickerEvent, Point, Rect, SelectionChange, Size,
};

use super::render::{self, render_trigger, Canvas};
use super::theme::Glyphs;

/// One user intention, decoupled from the physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Move trigger focus to the next picker
    FocusNext,
    /// Move the hover cursor up within the current column
    CursorUp,
    /// Move the hover cursor down within the current column
    CursorDown,
    /// Move the hover cursor into the next column
    ColumnRight,
    /// Move the hover cursor back one column
    ColumnLeft,
    /// Open the focused trigger, or activate the hovered node
    Activate,
    /// Toggle the current column's "show more" affordance
    ToggleExpansion,
    /// Close the open panel (Escape)
    Dismiss,
    /// Leave the browse loop
    Quit,
}

/// Convert a keyboard event to a BrowseAction
pub fn key_to_action(key: KeyEvent) -> Option<BrowseAction> {
    match key.code {
        KeyCode::Tab => Some(BrowseAction::FocusNext),
        KeyCode::Up | KeyCode::Char('k') => Some(BrowseAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowseAction::CursorDown),
        KeyCode::Right | KeyCode::Char('l') => Some(BrowseAction::ColumnRight),
        KeyCode::Left | KeyCode::Char('h') => Some(BrowseAction::ColumnLeft),
        KeyCode::Enter | KeyCode::Char(' ') => Some(BrowseAction::Activate),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(BrowseAction::ToggleExpansion),
        KeyCode::Esc => Some(BrowseAction::Dismiss),
        KeyCode::Char('q') => Some(BrowseAction::Quit),
        _ => None,
    }
}

/// Trigger labels, in focus order.
pub const PICKER_LABELS: [&str; 3] = ["Ubicación", "Tipo", "Características"];

const LOCATION: usize = 0;
const TYPES: usize = 1;
const CHARACTERISTICS: usize = 2;

/// Final committed state handed back when the loop exits.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseSummary {
    pub location: Vec<String>,
    pub location_labels: Vec<String>,
    pub property_types: Vec<String>,
    pub amenities: AmenitySet,
    pub filters: Vec<String>,
}

/// The interactive search-bar demo: three pickers, one arbiter, one store.
pub struct BrowseApp {
    location_tree: Vec<HierarchyNode>,
    type_tree: Vec<HierarchyNode>,
    characteristic_tree: Vec<HierarchyNode>,

    location: PanelPicker,
    types: PanelPicker,
    characteristics: PanelPicker,
    amenities: AmenityStore,

    focus: usize,
    /// Hover cursor of the open panel: (column, visible row).
    cursor: (usize, usize),
    viewport: Size,
    config: Config,
}

impl BrowseApp {
    pub fn new(
        location_tree: Vec<HierarchyNode>,
        type_tree: Vec<HierarchyNode>,
        characteristic_tree: Vec<HierarchyNode>,
        config: Config,
        viewport: Size,
    ) -> Self {
        let arbiter = OpenArbiter::new();
        let layout = config.panel_layout();
        let location = PanelPicker::new(
            arbiter.clone(),
            config.picker_options(crate::engine::SelectionMode::Single),
        )
        .with_layout(layout);
        let types = PanelPicker::new(
            arbiter.clone(),
            config.picker_options(crate::engine::SelectionMode::Multiple),
        )
        .with_layout(layout);
        let characteristics = PanelPicker::new(
            arbiter,
            config.picker_options(crate::engine::SelectionMode::Multiple),
        )
        .with_layout(layout);

        Self {
            location_tree,
            type_tree,
            characteristic_tree,
            location,
            types,
            characteristics,
            amenities: AmenityStore::multiple(),
            focus: 0,
            cursor: (0, 0),
            viewport,
            config,
        }
    }

    pub fn amenities(&self) -> &AmenityStore {
        &self.amenities
    }

    pub fn amenities_mut(&mut self) -> &mut AmenityStore {
        &mut self.amenities
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    fn tree(&self, index: usize) -> &[HierarchyNode] {
        match index {
            LOCATION => &self.location_tree,
            TYPES => &self.type_tree,
            _ => &self.characteristic_tree,
        }
    }

    fn picker(&self, index: usize) -> &PanelPicker {
        match index {
            LOCATION => &self.location,
            TYPES => &self.types,
            _ => &self.characteristics,
        }
    }

    fn dispatch(&mut self, index: usize, event: PickerEvent) -> Option<SelectionChange> {
        match index {
            LOCATION => self.location.handle(&self.location_tree, event),
            TYPES => self.types.handle(&self.type_tree, event),
            _ => self.characteristics.handle(&self.characteristic_tree, event),
        }
    }

    /// Which picker currently owns the open slot, if any.
    pub fn open_index(&self) -> Option<usize> {
        (0..PICKER_LABELS.len()).find(|&index| self.picker(index).is_open())
    }

    /// Trigger rectangles along the top row.
    pub fn trigger_rect(&self, index: usize) -> Rect {
        let layout = self.config.panel_layout();
        let width = layout.column_width;
        Rect::new(
            layout.viewport_margin + index as i32 * (width + 2),
            0,
            width,
            1,
        )
    }

    /// Feed one action through the app. Returns true when the loop should
    /// exit.
    pub fn apply(&mut self, action: BrowseAction) -> bool {
        match action {
            BrowseAction::Quit => return true,
            BrowseAction::FocusNext => {
                self.focus = (self.focus + 1) % PICKER_LABELS.len();
            }
            BrowseAction::Dismiss => {
                if let Some(open) = self.open_index() {
                    self.dispatch(open, PickerEvent::EscapePressed);
                }
            }
            BrowseAction::Activate => match self.open_index() {
                Some(open) => self.activate_cursor(open),
                None => self.open_focused(),
            },
            BrowseAction::CursorUp => self.move_cursor(0, -1),
            BrowseAction::CursorDown => self.move_cursor(0, 1),
            BrowseAction::ColumnRight => self.move_cursor(1, 0),
            BrowseAction::ColumnLeft => self.move_cursor(-1, 0),
            BrowseAction::ToggleExpansion => {
                if let Some(open) = self.open_index() {
                    let column = self.cursor.0;
                    self.dispatch(open, PickerEvent::ColumnExpansionToggled { column });
                    self.clamp_cursor(open);
                }
            }
        }
        false
    }

    fn open_focused(&mut self) {
        let trigger = self.trigger_rect(self.focus);
        let viewport = self.viewport;
        self.dispatch(self.focus, PickerEvent::TriggerActivated { trigger, viewport });
        self.cursor = (0, 0);
        if let Some(open) = self.open_index() {
            self.hover_cursor(open);
        }
    }

    fn activate_cursor(&mut self, open: usize) {
        let Some(id) = self.node_id_at(open, self.cursor) else {
            return;
        };
        let column = self.cursor.0;
        let change = self.dispatch(open, PickerEvent::NodeActivated { column, id });
        if let Some(change) = change {
            self.on_change(open, &change);
        }
        if self.open_index().is_some() {
            self.clamp_cursor(open);
        }
    }

    fn move_cursor(&mut self, column_delta: i32, row_delta: i32) {
        let Some(open) = self.open_index() else {
            return;
        };
        let columns = self.picker(open).columns(self.tree(open));
        if columns.is_empty() {
            return;
        }

        let (mut column, mut row) = self.cursor;
        if column_delta != 0 {
            let next = column as i32 + column_delta;
            if next < 0 || next as usize >= columns.len() {
                return;
            }
            column = next as usize;
            // Landing on the column that is already part of the path keeps
            // the pointer on the node that spawned the flyout.
            row = self
                .picker(open)
                .path()
                .get(column)
                .and_then(|id| columns[column].iter().position(|node| &node.id == id))
                .unwrap_or(0);
        } else {
            let visible = self
                .picker(open)
                .visible_count(column, columns[column].len());
            if visible == 0 {
                return;
            }
            let next = row as i32 + row_delta;
            if next < 0 || next as usize >= visible {
                return;
            }
            row = next as usize;
        }

        self.cursor = (column, row);
        self.hover_cursor(open);
    }

    /// Fire a hover for the node under the cursor (branch rows drill in;
    /// the picker ignores leaves).
    fn hover_cursor(&mut self, open: usize) {
        let (column, row) = self.cursor;
        let Some(id) = self.node_id_at(open, (column, row)) else {
            return;
        };
        let rects = self.picker(open).column_rects(self.tree(open));
        let Some(rect) = rects.get(column) else {
            return;
        };
        let row_height = self.picker(open).layout().row_height;
        let item = Rect::new(rect.x, rect.y + row as i32 * row_height, rect.width, row_height);
        self.dispatch(open, PickerEvent::NodeHovered { column, id, item });
        self.clamp_cursor(open);
    }

    fn node_id_at(&self, index: usize, cursor: (usize, usize)) -> Option<String> {
        let columns = self.picker(index).columns(self.tree(index));
        let nodes = columns.get(cursor.0)?;
        let visible = self.picker(index).visible_count(cursor.0, nodes.len());
        nodes
            .get(cursor.1)
            .filter(|_| cursor.1 < visible)
            .map(|node| node.id.clone())
    }

    fn clamp_cursor(&mut self, index: usize) {
        let columns = self.picker(index).columns(self.tree(index));
        if columns.is_empty() {
            self.cursor = (0, 0);
            return;
        }
        let column = self.cursor.0.min(columns.len() - 1);
        let visible = self
            .picker(index)
            .visible_count(column, columns[column].len());
        let row = if visible == 0 {
            0
        } else {
            self.cursor.1.min(visible - 1)
        };
        self.cursor = (column, row);
    }

    /// Mouse press at a cell: triggers toggle, rows activate, the expansion
    /// affordance toggles, anything else is an outside click.
    pub fn click(&mut self, point: Point) {
        for index in 0..PICKER_LABELS.len() {
            if self.trigger_rect(index).contains(point) {
                self.focus = index;
                self.open_focused();
                return;
            }
        }

        let Some(open) = self.open_index() else {
            return;
        };
        let rects = self.picker(open).column_rects(self.tree(open));
        let columns = self.picker(open).columns(self.tree(open));
        for (column, rect) in rects.iter().enumerate() {
            if !rect.contains(point) {
                continue;
            }
            let row_height = self.picker(open).layout().row_height.max(1);
            let row = ((point.y - rect.y) / row_height) as usize;
            let visible = self
                .picker(open)
                .visible_count(column, columns[column].len());
            if row < visible {
                self.cursor = (column, row);
                self.activate_cursor(open);
            } else if self.picker(open).can_expand(columns[column].len()) {
                self.dispatch(open, PickerEvent::ColumnExpansionToggled { column });
                self.clamp_cursor(open);
            }
            return;
        }

        self.dispatch(open, PickerEvent::OutsideClick);
    }

    /// Viewport resize: re-measure every rectangle and let the open picker
    /// reposition its columns.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Size {
            width: i32::from(width),
            height: i32::from(height),
        };
        if let Some(open) = self.open_index() {
            let trigger = self.trigger_rect(open);
            let viewport = self.viewport;
            self.dispatch(open, PickerEvent::ViewportChanged { trigger, viewport });
            self.clamp_cursor(open);
        }
    }

    /// React to a committed change: the characteristics picker feeds the
    /// amenity store (leaf meta → key/value); the other pickers own plain
    /// id lists.
    fn on_change(&mut self, index: usize, change: &SelectionChange) {
        if index != CHARACTERISTICS {
            return;
        }
        let discrete_keys: Vec<String> = self
            .amenities
            .values()
            .iter()
            .filter(|(_, value)| matches!(value, AmenityValue::Discrete(_)))
            .map(|(key, _)| key.clone())
            .collect();
        for key in discrete_keys {
            self.amenities.remove(&key);
        }
        for node in &change.nodes {
            self.amenities.apply_leaf(node);
        }
    }

    /// Paint the whole screen into a string.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let width = self.viewport.width.max(0) as usize;
        let height = self.viewport.height.max(0) as usize;
        let mut canvas = Canvas::new(width, height);

        for (index, label) in PICKER_LABELS.iter().enumerate() {
            let picker = self.picker(index);
            let caption = match index {
                CHARACTERISTICS => {
                    let filters = amenity::encode(self.amenities.values());
                    if filters.is_empty() {
                        String::new()
                    } else {
                        format!("{} filtros", filters.len())
                    }
                }
                _ => labels_for_ids(self.tree(index), picker.value()).join(", "),
            };
            render_trigger(
                &mut canvas,
                self.trigger_rect(index),
                label,
                &caption,
                index == self.focus,
                picker.is_open(),
                glyphs,
            );
        }

        canvas.put_str(0, 1, &glyphs.horizontal.repeat(width));

        if let Some(open) = self.open_index() {
            render::render_panel(
                &mut canvas,
                self.picker(open),
                self.tree(open),
                Some(self.cursor),
                glyphs,
            );
        }

        let status = render::render_status_bar(
            &labels_for_ids(&self.location_tree, self.location.value()).join(" › "),
            &labels_for_ids(&self.type_tree, self.types.value()).join(", "),
            &amenity::encode(self.amenities.values()),
        );
        canvas.put_str(0, self.viewport.height - 1, &status);

        canvas.to_string()
    }

    /// Snapshot of everything committed so far.
    pub fn summary(&self) -> BrowseSummary {
        BrowseSummary {
            location: self.location.value().to_vec(),
            location_labels: labels_for_ids(&self.location_tree, self.location.value()),
            property_types: self.types.value().to_vec(),
            amenities: self.amenities.values().clone(),
            filters: amenity::encode(self.amenities.values()),
        }
    }
}

/// Run the browse loop on the attached terminal.
/// Returns the committed summary when the user quits.
pub fn run_interactive(app: &mut BrowseApp, glyphs: &Glyphs, color: bool) -> io::Result<BrowseSummary> {
    use crossterm::{
        cursor,
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        style::{ResetColor, SetForegroundColor},
        terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    };

    use super::theme::colors;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let render_ui = |stdout: &mut io::Stdout, app: &BrowseApp| -> io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let frame = app.render(glyphs);
        for line in frame.lines() {
            print!("{}\r\n", line);
        }
        if color {
            execute!(stdout, SetForegroundColor(colors::DIM))?;
        }
        for line in render::render_help_bar(glyphs.unicode).lines() {
            print!("{}\r\n", line);
        }
        if color {
            execute!(stdout, ResetColor)?;
        }
        stdout.flush()
    };

    render_ui(&mut stdout, app)?;

    loop {
        let mut dirty = false;
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = key_to_action(key) {
                        if app.apply(action) {
                            break;
                        }
                        dirty = true;
                    }
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.click(Point {
                        x: i32::from(mouse.column),
                        y: i32::from(mouse.row),
                    });
                    dirty = true;
                }
            }
            Event::Resize(width, height) => {
                app.resize(width, height);
                dirty = true;
            }
            _ => {}
        }
        if dirty {
            render_ui(&mut stdout, app)?;
        }
    }

    execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    Ok(app.summary())
}
