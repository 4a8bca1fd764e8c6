//! The stateful picker controller.
//!
//! `PanelPicker` owns the open/closed lifecycle and screen geometry of one
//! picker instance and delegates all selection logic to [`crate::engine`].
//! Selection itself follows the controlled-component pattern: the consumer
//! owns the committed value and feeds it back in through [`PanelPicker::set_value`];
//! the picker keeps two separate slots, the committed mirror (for
//! rendering) and the draft navigation path (discarded on every close), and
//! never merges them.

use std::collections::HashMap;
use std::rc::Rc;

use crate::engine;
use crate::model::node::{resolve_leaves, HierarchyNode};

use super::arbiter::{OpenArbiter, PickerId};
use super::geometry::{self, PanelLayout, Point, Rect, Size};
use super::options::PickerOptions;

/// Emitted exactly once per committing interaction: the full new selection
/// plus the resolved leaf nodes, in tree order. Branch navigation never
/// produces one.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub ids: Vec<String>,
    pub nodes: Vec<HierarchyNode>,
}

/// Input events the controller reacts to. All geometry is measured by the
/// caller (the thin boundary adapter) and passed in as plain rectangles.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The trigger control was activated: toggles open/closed.
    TriggerActivated { trigger: Rect, viewport: Size },
    /// The pointer entered a row. Branch rows drill in; leaf rows are a
    /// no-op (hovering never opens an empty column).
    NodeHovered {
        column: usize,
        id: String,
        item: Rect,
    },
    /// A row was activated (click / Enter).
    NodeActivated { column: usize, id: String },
    /// The "show more / show less" affordance of one column was toggled.
    ColumnExpansionToggled { column: usize },
    /// A click landed outside both trigger and panel.
    OutsideClick,
    EscapePressed,
    /// The viewport was resized or scrolled; rectangles were re-measured.
    ViewportChanged { trigger: Rect, viewport: Size },
}

#[derive(Debug)]
struct OpenState {
    /// Draft navigation path, root level first. Never outlives the panel.
    path: Vec<String>,
    /// Per-column "show all" flags.
    expanded: HashMap<usize, bool>,
    /// Flyout top per column, captured from the hovered row that spawned it.
    tops: HashMap<usize, i32>,
    trigger: Rect,
    viewport: Size,
    origin: Point,
}

#[derive(Debug)]
enum PickerState {
    Closed,
    Open(OpenState),
}

/// One cascading panel picker instance.
pub struct PanelPicker {
    id: PickerId,
    arbiter: Rc<OpenArbiter>,
    options: PickerOptions,
    layout: PanelLayout,
    /// Mirror of the consumer-owned committed selection.
    value: Vec<String>,
    state: PickerState,
}

impl PanelPicker {
    pub fn new(arbiter: Rc<OpenArbiter>, options: PickerOptions) -> Self {
        let id = arbiter.register();
        Self {
            id,
            arbiter,
            options,
            layout: PanelLayout::default(),
            value: Vec::new(),
            state: PickerState::Closed,
        }
    }

    pub fn with_layout(mut self, layout: PanelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// The committed selection mirror.
    pub fn value(&self) -> &[String] {
        &self.value
    }

    /// Replace the committed selection from the consumer side. Ids that do
    /// not resolve in the current tree simply render as unselected. The
    /// draft path, if a panel is open, is deliberately left alone.
    pub fn set_value(&mut self, ids: Vec<String>) {
        self.value = ids;
    }

    /// Open means: locally open *and* still holding the arbiter slot.
    /// A picker evicted by another instance reports closed immediately,
    /// before it has processed any further event.
    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open(_)) && self.arbiter.is_holder(self.id)
    }

    /// Feed one event through the state machine. Returns a change only for
    /// committing interactions.
    pub fn handle(
        &mut self,
        roots: &[HierarchyNode],
        event: PickerEvent,
    ) -> Option<SelectionChange> {
        self.sync();

        match event {
            PickerEvent::TriggerActivated { trigger, viewport } => {
                if matches!(self.state, PickerState::Open(_)) {
                    self.close();
                } else {
                    self.open(trigger, viewport);
                }
                None
            }
            PickerEvent::NodeHovered { column, id, item } => {
                self.hover(roots, column, &id, item);
                None
            }
            PickerEvent::NodeActivated { column, id } => self.activate(roots, column, &id),
            PickerEvent::ColumnExpansionToggled { column } => {
                if let PickerState::Open(open) = &mut self.state {
                    let flag = open.expanded.entry(column).or_insert(false);
                    *flag = !*flag;
                }
                None
            }
            PickerEvent::OutsideClick | PickerEvent::EscapePressed => {
                if matches!(self.state, PickerState::Open(_)) {
                    self.close();
                }
                None
            }
            PickerEvent::ViewportChanged { trigger, viewport } => {
                if let PickerState::Open(open) = &mut self.state {
                    open.trigger = trigger;
                    open.viewport = viewport;
                    open.origin = geometry::panel_position(
                        &trigger,
                        base_panel_size(&self.options, &self.layout),
                        viewport,
                        self.layout.viewport_margin,
                    );
                }
                None
            }
        }
    }

    /// Drop a stale Open state after another instance claimed the slot.
    /// The draft path dies with it; the committed value stays.
    fn sync(&mut self) {
        if matches!(self.state, PickerState::Open(_)) && !self.arbiter.is_holder(self.id) {
            self.state = PickerState::Closed;
        }
    }

    fn open(&mut self, trigger: Rect, viewport: Size) {
        // Claim the slot first: the previous holder must already report
        // closed by the time this panel renders.
        self.arbiter.request_open(self.id);
        let origin = geometry::panel_position(
            &trigger,
            base_panel_size(&self.options, &self.layout),
            viewport,
            self.layout.viewport_margin,
        );
        self.state = PickerState::Open(OpenState {
            path: Vec::new(),
            expanded: HashMap::new(),
            tops: HashMap::new(),
            trigger,
            viewport,
            origin,
        });
    }

    fn close(&mut self) {
        self.arbiter.release(self.id);
        self.state = PickerState::Closed;
    }

    fn hover(&mut self, roots: &[HierarchyNode], column: usize, id: &str, item: Rect) {
        let layout_width = self.layout.column_width;
        let PickerState::Open(open) = &mut self.state else {
            return;
        };
        let columns = engine::compute_columns(roots, &open.path);
        let Some(node) = columns
            .get(column)
            .and_then(|nodes| nodes.iter().find(|node| node.id == id))
        else {
            return;
        };
        if node.is_leaf() {
            return;
        }

        let activation = engine::activate(node, column, &open.path, self.options.mode, &self.value);
        open.path = activation.path;

        let panel = Rect::new(open.origin.x, open.origin.y, layout_width, 0);
        open.tops
            .insert(column + 1, geometry::flyout_offset(&item, &panel));
    }

    fn activate(
        &mut self,
        roots: &[HierarchyNode],
        column: usize,
        id: &str,
    ) -> Option<SelectionChange> {
        let closes = self.options.closes_on_leaf_select();
        let PickerState::Open(open) = &mut self.state else {
            return None;
        };
        let columns = engine::compute_columns(roots, &open.path);
        let node = columns
            .get(column)
            .and_then(|nodes| nodes.iter().find(|node| node.id == id))?;

        let activation = engine::activate(node, column, &open.path, self.options.mode, &self.value);
        if !activation.committed {
            open.path = activation.path;
            return None;
        }

        self.value = activation.selection;
        let change = SelectionChange {
            ids: self.value.clone(),
            nodes: resolve_leaves(roots, &self.value),
        };
        if closes {
            self.close();
        }
        Some(change)
    }

    // -- render accessors ---------------------------------------------------

    /// Visible columns; empty while closed (or for an empty tree).
    pub fn columns<'a>(&self, roots: &'a [HierarchyNode]) -> Vec<&'a [HierarchyNode]> {
        match &self.state {
            PickerState::Open(open) if self.arbiter.is_holder(self.id) => {
                engine::compute_columns(roots, &open.path)
            }
            _ => Vec::new(),
        }
    }

    /// Current draft path (empty while closed).
    pub fn path(&self) -> &[String] {
        match &self.state {
            PickerState::Open(open) if self.arbiter.is_holder(self.id) => &open.path,
            _ => &[],
        }
    }

    pub fn panel_origin(&self) -> Option<Point> {
        match &self.state {
            PickerState::Open(open) if self.arbiter.is_holder(self.id) => Some(open.origin),
            _ => None,
        }
    }

    pub fn trigger_rect(&self) -> Option<Rect> {
        match &self.state {
            PickerState::Open(open) => Some(open.trigger),
            _ => None,
        }
    }

    pub fn is_expanded(&self, column: usize) -> bool {
        match &self.state {
            PickerState::Open(open) => open.expanded.get(&column).copied().unwrap_or(false),
            _ => false,
        }
    }

    /// Items shown for a column of `len` nodes under the expansion rules.
    pub fn visible_count(&self, column: usize, len: usize) -> usize {
        if self.is_expanded(column) {
            len
        } else {
            len.min(self.options.initial_visible_items)
        }
    }

    /// Whether a column of `len` nodes carries a "show more" affordance.
    pub fn can_expand(&self, len: usize) -> bool {
        len > self.options.initial_visible_items
    }

    /// Highlight set for the committed selection (selected leaves plus all
    /// their ancestors).
    pub fn highlighted(&self, roots: &[HierarchyNode]) -> std::collections::HashSet<String> {
        engine::highlighted_ids(roots, &self.value)
    }

    /// Screen rectangles of the visible columns, clamped into the viewport.
    pub fn column_rects(&self, roots: &[HierarchyNode]) -> Vec<Rect> {
        let PickerState::Open(open) = &self.state else {
            return Vec::new();
        };
        if !self.arbiter.is_holder(self.id) {
            return Vec::new();
        }

        let columns = engine::compute_columns(roots, &open.path);
        let heights: Vec<i32> = columns
            .iter()
            .enumerate()
            .map(|(index, nodes)| {
                let rows = self.visible_count(index, nodes.len())
                    + usize::from(self.can_expand(nodes.len()));
                rows as i32 * self.layout.row_height
            })
            .collect();
        let tops: Vec<i32> = (0..columns.len())
            .map(|index| open.tops.get(&index).copied().unwrap_or(0))
            .collect();

        geometry::column_rects(open.origin, &tops, &heights, &self.layout, open.viewport)
    }
}

fn base_panel_size(options: &PickerOptions, layout: &PanelLayout) -> Size {
    Size {
        width: layout.column_width,
        height: options.initial_visible_items as i32 * layout.row_height,
    }
}
