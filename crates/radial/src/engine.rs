use crate::angle::AngleResolver;
use crate::input::{InputEvent, MouseButton, Point};
use crate::layout;
use crate::settings::MenuSettings;
use crate::tree::{IconTag, Label, MenuNode, MenuTree, NodeId};

pub const BACK_LABEL: &str = "Back";

/// Which sectors changed highlight. `from` is `None` when nothing was hovered before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub from: Option<usize>,
    pub to: usize,
}

/// What the host has to do after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    pub redraw: bool,
    /// The sector list changed and positions must be recomputed.
    pub relayout: bool,
    pub shown: bool,
    pub hidden: bool,
    pub hover_change: Option<HoverChange>,
    /// A leaf action ran.
    pub fired: bool,
}

impl Response {
    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorKind {
    Back,
    Item(NodeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sector<'a> {
    pub index: usize,
    pub kind: SectorKind,
    pub label: &'a str,
    pub icon: Option<&'a IconTag>,
    pub offset: Point,
    pub hovered: bool,
    pub is_branch: bool,
}

#[derive(Debug, Clone, Copy)]
struct Session {
    active: NodeId,
    anchor: Point,
    hovered: usize,
}

/// Radial menu state machine. Feed it host input; it answers with a [`Response`].
pub struct Engine {
    settings: MenuSettings,
    tree: MenuTree,
    pending: Option<MenuTree>,
    session: Option<Session>,
    resolver: AngleResolver,
    cursor: Point,
    key_released: bool,
    started: bool,
}

impl Engine {
    pub fn new(settings: MenuSettings, tree: MenuTree) -> Self {
        Self {
            settings,
            tree,
            pending: None,
            session: None,
            resolver: AngleResolver::new(),
            cursor: Point::default(),
            key_released: true,
            started: false,
        }
    }

    /// Registers with the host. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.key_released = true;
        log::debug!("radial menu started");
        true
    }

    pub fn stop(&mut self) -> Response {
        if !self.started {
            return Response::default();
        }
        let response = self.deactivate();
        self.started = false;
        log::debug!("radial menu stopped");
        response
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: MenuSettings) -> Response {
        let radius_changed = settings.radius != self.settings.radius;
        self.settings = settings;
        Response {
            redraw: self.is_open() && radius_changed,
            relayout: self.is_open() && radius_changed,
            ..Default::default()
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Response {
        if !self.started {
            return Response::default();
        }
        match event {
            InputEvent::KeyDown(key) if *key == self.settings.activation_key => {
                if self.is_open() || !self.key_released {
                    return Response::default();
                }
                self.key_released = false;
                self.activate()
            }
            InputEvent::KeyUp(key) if *key == self.settings.activation_key => {
                self.key_released = true;
                self.deactivate()
            }
            InputEvent::PointerMove(point) => {
                self.cursor = *point;
                self.update_hover()
            }
            InputEvent::PointerDown(MouseButton::Primary) => self.confirm(),
            _ => Response::default(),
        }
    }

    /// Opens the menu at the last known cursor position, showing the root.
    pub fn activate(&mut self) -> Response {
        if !self.started || self.is_open() {
            return Response::default();
        }
        if let Some(tree) = self.pending.take() {
            self.tree = tree;
        }
        self.resolver.reset();
        self.session = Some(Session {
            active: self.tree.root(),
            anchor: self.cursor,
            hovered: 0,
        });
        log::debug!(
            "menu opened at ({}, {}) with {} sectors",
            self.cursor.x,
            self.cursor.y,
            self.sector_count()
        );
        Response {
            redraw: true,
            relayout: true,
            shown: true,
            hover_change: self.initial_hover(),
            ..Default::default()
        }
    }

    pub fn deactivate(&mut self) -> Response {
        if self.session.take().is_none() {
            return Response::default();
        }
        log::debug!("menu closed");
        Response {
            redraw: true,
            hidden: true,
            ..Default::default()
        }
    }

    /// Resolves the hovered sector from the cursor. Repeating it with the same cursor is a no-op.
    /// Moving within the hovered sector changes no hover state; the redraw it asks for only
    /// repositions the angle indicator.
    pub fn update_hover(&mut self) -> Response {
        let count = self.sector_count();
        let Some(session) = self.session.as_mut() else {
            return Response::default();
        };

        let previous_angle = self.resolver.angle();
        let Some(index) = self.resolver.resolve(self.cursor - session.anchor, count) else {
            return Response::default();
        };
        let angle_changed = self.resolver.angle() != previous_angle;

        if index == session.hovered {
            return Response {
                redraw: angle_changed,
                ..Default::default()
            };
        }

        let from = (session.hovered < count).then_some(session.hovered);
        session.hovered = index;
        Response {
            redraw: true,
            hover_change: Some(HoverChange { from, to: index }),
            ..Default::default()
        }
    }

    /// Acts on the hovered sector: back, descend into a branch, or run a leaf and close.
    pub fn confirm(&mut self) -> Response {
        let Some(session) = self.session else {
            return Response::default();
        };
        let count = self.sector_count();
        if session.hovered >= count {
            log::trace!("ignoring confirm on stale sector {}", session.hovered);
            return Response::default();
        }

        let parent = self.tree.parent(session.active);
        let child_index = match parent {
            Some(parent) if session.hovered == 0 => return self.navigate(parent),
            Some(_) => session.hovered - 1,
            None => session.hovered,
        };

        let Some(&child) = self.tree.children(session.active).get(child_index) else {
            return Response::default();
        };
        if self.tree.is_branch(child) {
            return self.navigate(child);
        }

        let action = self.tree.node(child).and_then(|n| n.action.clone());
        let mut response = self.deactivate();
        match action {
            Some(action) => {
                log::debug!("running action for sector {}", session.hovered);
                action.invoke();
                response.fired = true;
            }
            None => log::debug!("sector {} has no action", session.hovered),
        }
        response
    }

    /// Replaces the whole tree. An open menu jumps back to the new root; a closed one picks the
    /// tree up on the next activation.
    pub fn rebuild_tree(&mut self, tree: MenuTree) -> Response {
        let Some(session) = self.session.as_mut() else {
            self.pending = Some(tree);
            return Response::default();
        };
        self.tree = tree;
        self.pending = None;
        session.active = self.tree.root();
        session.hovered = 0;
        log::debug!("menu tree rebuilt while open, back at root");
        Response {
            redraw: true,
            relayout: true,
            hover_change: self.initial_hover(),
            ..Default::default()
        }
    }

    /// The host swapped its render surface; visuals are torn down and the key guard reset.
    pub fn surface_changed(&mut self) -> Response {
        self.key_released = true;
        self.deactivate()
    }

    fn navigate(&mut self, to: NodeId) -> Response {
        let Some(session) = self.session.as_mut() else {
            return Response::default();
        };
        session.active = to;
        session.hovered = 0;
        if let Some(node) = self.tree.node(to) {
            log::debug!("navigated to {}", node.label);
        }
        Response {
            redraw: true,
            relayout: true,
            hover_change: self.initial_hover(),
            ..Default::default()
        }
    }

    fn initial_hover(&self) -> Option<HoverChange> {
        (self.sector_count() > 0).then_some(HoverChange { from: None, to: 0 })
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn active_node(&self) -> Option<NodeId> {
        self.session.map(|s| s.active)
    }

    pub fn active_menu_node(&self) -> Option<&MenuNode> {
        self.active_node().and_then(|id| self.tree.node(id))
    }

    pub fn hovered_sector(&self) -> Option<usize> {
        self.session
            .map(|s| s.hovered)
            .filter(|&h| h < self.sector_count())
    }

    pub fn anchor(&self) -> Option<Point> {
        self.session.map(|s| s.anchor)
    }

    /// Cursor angle in degrees, `[0, 360)`.
    pub fn indicator_angle(&self) -> f64 {
        self.resolver.angle()
    }

    /// Children of the displayed node, plus the back sector when it is not the root.
    pub fn sector_count(&self) -> usize {
        self.active_node().map_or(0, |id| {
            let back = usize::from(self.tree.parent(id).is_some());
            self.tree.children(id).len() + back
        })
    }

    pub fn radius(&self) -> f64 {
        self.active_menu_node()
            .and_then(|n| n.radius)
            .unwrap_or(self.settings.radius)
    }

    /// Label of the displayed node, omitted at the root.
    pub fn title(&self) -> Option<&Label> {
        self.active_menu_node()
            .filter(|n| !n.is_root())
            .map(|n| &n.label)
    }

    pub fn sectors(&self) -> Vec<Sector<'_>> {
        let Some(session) = self.session else {
            return Vec::new();
        };
        let count = self.sector_count();
        let radius = self.radius();

        let back = self.tree.parent(session.active).map(|_| (SectorKind::Back, None));
        let items = self
            .tree
            .children(session.active)
            .iter()
            .map(|&id| (SectorKind::Item(id), self.tree.node(id)));

        back.into_iter()
            .chain(items)
            .enumerate()
            .map(|(index, (kind, node))| Sector {
                index,
                kind,
                label: node.map_or(BACK_LABEL, |n| n.label.as_str()),
                icon: node.and_then(|n| n.icon.as_ref()),
                offset: layout::offset(radius, index, count),
                hovered: index == session.hovered,
                is_branch: node.is_some_and(MenuNode::is_branch),
            })
            .collect()
    }
}
