/// Developer-tools overlay planning
///
/// Turns a snapshot of what the host can see into backend-agnostic draw
/// commands: tile outlines and labels for actors and scene objects, model
/// hulls, projectile origins, inventory slot ids and the bounds of the
/// widget under inspection.
use serde::{Deserialize, Serialize};

use crate::actor::EntityGeometry;
use crate::geometry::{Model, Polygon, Rect, ScreenPoint};
use crate::projection::{canvas_tile_poly, SceneView};
use crate::scene::LocalPoint;

/// Tile objects farther than this from the local player are not labelled.
pub const MAX_DISTANCE: i32 = 2400;
/// Labels float this many units above an actor's logical height.
pub const LABEL_CLEARANCE: i32 = 40;
/// Item ids the host uses for empty and filled placeholder slots.
pub const ITEM_EMPTY: i32 = 6512;
pub const ITEM_FILLED: i32 = 20594;

const POLYGON_FILL_ALPHA: u8 = 50;
const SLOT_FILL_ALPHA: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

pub mod palette {
    use super::Rgba;

    pub const RED: Rgba = Rgba::rgb(221, 44, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 200, 83);
    pub const ORANGE: Rgba = Rgba::rgb(255, 109, 0);
    pub const YELLOW: Rgba = Rgba::rgb(255, 214, 0);
    pub const CYAN: Rgba = Rgba::rgb(0, 184, 212);
    pub const BLUE: Rgba = Rgba::rgb(41, 98, 255);
    pub const DEEP_PURPLE: Rgba = Rgba::rgb(98, 0, 234);
    pub const PURPLE: Rgba = Rgba::rgb(170, 0, 255);
    pub const GRAY: Rgba = Rgba::rgb(158, 158, 158);
    pub const PROJECTILE: Rgba = Rgba::rgb(255, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
}

/// One primitive for a 2D drawing backend, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<ScreenPoint>,
        stroke: Rgba,
        fill: Option<Rgba>,
    },
    /// `at` is the left end of the text baseline.
    Text {
        at: ScreenPoint,
        text: String,
        color: Rgba,
    },
    Rect {
        rect: Rect,
        stroke: Option<Rgba>,
        fill: Option<Rgba>,
    },
}

/// Font measurements supplied by the drawing backend.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
    fn text_height(&self) -> i32;
}

/// Which annotation groups to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayToggles {
    pub players: bool,
    pub npcs: bool,
    pub ground_items: bool,
    pub ground_objects: bool,
    pub game_objects: bool,
    pub walls: bool,
    pub decorations: bool,
    pub inventory: bool,
    pub projectiles: bool,
}

impl Default for OverlayToggles {
    fn default() -> Self {
        Self {
            players: true,
            npcs: true,
            ground_items: true,
            ground_objects: true,
            game_objects: true,
            walls: true,
            decorations: true,
            inventory: false,
            projectiles: true,
        }
    }
}

impl OverlayToggles {
    fn any_tile_objects(&self) -> bool {
        self.ground_items || self.ground_objects || self.game_objects || self.walls || self.decorations
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    LocalPlayer,
    Player,
    Npc { id: i32, combat_level: i32 },
}

/// What the overlay needs to know about one actor this frame.
#[derive(Debug, Clone)]
pub struct ActorMarker<'a> {
    pub kind: ActorKind,
    pub name: String,
    pub local: LocalPoint,
    pub orientation: i32,
    pub logical_height: i32,
    pub animation: i32,
    pub graphic: i32,
    pub model: Option<&'a Model>,
    /// Pre-projected model faces, drawn for the local player.
    pub wireframe: Vec<Polygon>,
}

impl ActorMarker<'_> {
    fn label(&self) -> String {
        match self.kind {
            ActorKind::Npc { id, .. } => format!(
                "{} (ID: {}) (A: {}) (G: {})",
                self.name, id, self.animation, self.graphic
            ),
            _ => format!("{} (A: {}) (G: {})", self.name, self.animation, self.graphic),
        }
    }

    fn color(&self) -> Rgba {
        match self.kind {
            ActorKind::LocalPlayer => palette::CYAN,
            ActorKind::Player => palette::BLUE,
            ActorKind::Npc { combat_level, .. } if combat_level > 1 => palette::YELLOW,
            ActorKind::Npc { .. } => palette::ORANGE,
        }
    }
}

impl EntityGeometry for ActorMarker<'_> {
    fn local_x(&self) -> i32 {
        self.local.x
    }

    fn local_y(&self) -> i32 {
        self.local.y
    }

    fn orientation(&self) -> i32 {
        self.orientation
    }

    fn model(&self) -> Option<&Model> {
        self.model
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileObjectKind {
    GroundItem { quantity: i32 },
    GroundObject,
    GameObject,
    Wall,
    Decoration,
}

/// A scene object sitting on a tile.
#[derive(Debug, Clone)]
pub struct TileObjectMarker<'a> {
    pub kind: TileObjectKind,
    pub id: i32,
    pub local: LocalPoint,
    pub orientation: i32,
    pub model: Option<&'a Model>,
}

impl TileObjectMarker<'_> {
    fn label(&self) -> String {
        match self.kind {
            TileObjectKind::GroundItem { quantity } => format!("ID: {} Qty:{}", self.id, quantity),
            _ => format!("ID: {}", self.id),
        }
    }

    fn color(&self) -> Rgba {
        match self.kind {
            TileObjectKind::GroundItem { .. } => palette::RED,
            TileObjectKind::GroundObject => palette::PURPLE,
            TileObjectKind::GameObject => palette::GREEN,
            TileObjectKind::Wall => palette::GRAY,
            TileObjectKind::Decoration => palette::DEEP_PURPLE,
        }
    }

    fn enabled(&self, toggles: &OverlayToggles) -> bool {
        match self.kind {
            TileObjectKind::GroundItem { .. } => toggles.ground_items,
            TileObjectKind::GroundObject => toggles.ground_objects,
            TileObjectKind::GameObject => toggles.game_objects,
            TileObjectKind::Wall => toggles.walls,
            TileObjectKind::Decoration => toggles.decorations,
        }
    }

    fn draws_hull(&self) -> bool {
        matches!(
            self.kind,
            TileObjectKind::GameObject | TileObjectKind::Decoration
        )
    }
}

impl EntityGeometry for TileObjectMarker<'_> {
    fn local_x(&self) -> i32 {
        self.local.x
    }

    fn local_y(&self) -> i32 {
        self.local.y
    }

    fn orientation(&self) -> i32 {
        self.orientation
    }

    fn model(&self) -> Option<&Model> {
        self.model
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileMarker {
    pub id: i32,
    pub origin: LocalPoint,
    /// Index into [`OverlayScene::actors`] of the projectile's target.
    pub target: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySlot {
    pub bounds: Rect,
    pub item_id: i32,
}

/// The widget picked in the inspector, with its item slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWidget {
    pub bounds: Rect,
    /// `-1` when the widget shows no item.
    pub item_id: i32,
    pub item_index: Option<usize>,
    pub items: Vec<InventorySlot>,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayScene<'a> {
    pub actors: Vec<ActorMarker<'a>>,
    /// Index into `actors` of the local player.
    pub local_player: Option<usize>,
    pub tile_objects: Vec<TileObjectMarker<'a>>,
    pub projectiles: Vec<ProjectileMarker>,
    /// `None` while the inventory is hidden.
    pub inventory: Option<Vec<InventorySlot>>,
    pub selected_widget: Option<SelectedWidget>,
}

/// Plan one frame of the overlay.
pub fn plan_overlay(
    scene: &OverlayScene<'_>,
    view: &SceneView<'_>,
    toggles: &OverlayToggles,
    metrics: &dyn TextMetrics,
) -> Vec<DrawCommand> {
    let _span = tracing::info_span!("plan_overlay").entered();
    let mut planner = Planner {
        view,
        metrics,
        commands: Vec::new(),
    };

    let local_player = scene.local_player.and_then(|i| scene.actors.get(i));

    if toggles.players {
        for (i, actor) in scene.actors.iter().enumerate() {
            if actor.kind == ActorKind::Player && Some(i) != scene.local_player {
                planner.actor(actor, &actor.label(), actor.color());
            }
        }
        if let Some(local) = local_player {
            planner.actor(local, &local.label(), local.color());
            planner.wireframe(local, palette::CYAN);
        }
    }

    if toggles.npcs {
        for actor in &scene.actors {
            if matches!(actor.kind, ActorKind::Npc { .. }) {
                planner.actor(actor, &actor.label(), actor.color());
            }
        }
    }

    if toggles.any_tile_objects() {
        match local_player {
            Some(player) => {
                for object in scene.tile_objects.iter().filter(|o| o.enabled(toggles)) {
                    planner.tile_object(object, player.local);
                }
            }
            None => tracing::trace!("no local player, skipping tile objects"),
        }
    }

    if toggles.inventory {
        if let Some(slots) = &scene.inventory {
            for slot in slots {
                planner.inventory_slot(slot);
            }
        }
    }

    if toggles.projectiles {
        for projectile in &scene.projectiles {
            planner.projectile(projectile, &scene.actors);
        }
    }

    if let Some(widget) = &scene.selected_widget {
        planner.widget(widget);
    }

    tracing::debug!(commands = planner.commands.len(), "overlay planned");
    planner.commands
}

struct Planner<'v, 'a> {
    view: &'v SceneView<'a>,
    metrics: &'v dyn TextMetrics,
    commands: Vec<DrawCommand>,
}

impl Planner<'_, '_> {
    fn polygon(&mut self, polygon: Polygon, color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: polygon.into_points(),
            stroke: color,
            fill: Some(color.with_alpha(POLYGON_FILL_ALPHA)),
        });
    }

    fn outline(&mut self, polygon: Polygon, color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: polygon.into_points(),
            stroke: color,
            fill: None,
        });
    }

    /// Text with a one-pixel black drop shadow.
    fn text(&mut self, at: ScreenPoint, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            at: ScreenPoint::new(at.x + 1, at.y + 1),
            text: text.to_owned(),
            color: palette::BLACK,
        });
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_owned(),
            color,
        });
    }

    fn centered_text(&mut self, bounds: Rect, text: &str, color: Rgba) {
        let x = bounds.x + bounds.width / 2 - self.metrics.text_width(text) / 2;
        let y = bounds.y + bounds.height / 2 + self.metrics.text_height() / 2;
        self.text(ScreenPoint::new(x, y), text, color);
    }

    fn actor(&mut self, actor: &ActorMarker<'_>, label: &str, color: Rgba) {
        match actor.canvas_tile_poly(self.view) {
            Some(poly) => self.polygon(poly, color),
            None => tracing::trace!(name = %actor.name, "actor tile off screen"),
        }
        let width = self.metrics.text_width(label);
        if let Some(at) =
            actor.canvas_text_location(self.view, width, actor.logical_height + LABEL_CLEARANCE)
        {
            self.text(at, label, color);
        }
    }

    fn wireframe(&mut self, actor: &ActorMarker<'_>, color: Rgba) {
        for face in &actor.wireframe {
            self.outline(face.clone(), color);
        }
    }

    fn tile_object(&mut self, object: &TileObjectMarker<'_>, player: LocalPoint) {
        let color = object.color();
        if player.distance_to(&object.local) <= MAX_DISTANCE {
            if let Some(poly) = object.canvas_tile_poly(self.view) {
                self.polygon(poly, color);
            }
            let label = object.label();
            let width = self.metrics.text_width(&label);
            if let Some(at) = object.canvas_text_location(self.view, width, 0) {
                self.text(at, &label, color);
            }
        }

        if object.draws_hull() {
            if let Some(hull) = object.convex_hull(self.view) {
                self.outline(hull, color);
            }
        }
    }

    fn inventory_slot(&mut self, slot: &InventorySlot) {
        self.commands.push(DrawCommand::Rect {
            rect: slot.bounds,
            stroke: None,
            fill: Some(palette::WHITE.with_alpha(SLOT_FILL_ALPHA)),
        });
        self.centered_text(slot.bounds, &slot.item_id.to_string(), palette::YELLOW);
    }

    fn projectile(&mut self, projectile: &ProjectileMarker, actors: &[ActorMarker<'_>]) {
        if let Some(poly) = canvas_tile_poly(self.view, projectile.origin) {
            self.polygon(poly, palette::PROJECTILE);
        }

        let target = projectile.target.and_then(|i| actors.get(i));
        let mut info = match target {
            Some(actor) => format!("Targeted (T: {})", actor.name),
            None => "AoE".to_owned(),
        };
        info.push_str(&format!(" (ID: {})", projectile.id));

        if let Some(actor) = target {
            self.actor(actor, &info, palette::PROJECTILE);
        }
    }

    fn widget(&mut self, widget: &SelectedWidget) {
        self.commands.push(DrawCommand::Rect {
            rect: widget.bounds,
            stroke: Some(palette::CYAN),
            fill: None,
        });

        let Some(index) = widget.item_index else {
            return;
        };

        if !is_placeholder(widget.item_id) {
            self.commands.push(DrawCommand::Rect {
                rect: widget.bounds,
                stroke: Some(palette::ORANGE),
                fill: None,
            });
            if widget.item_id != -1 {
                self.centered_text(widget.bounds, &widget.item_id.to_string(), palette::YELLOW);
            }
        }

        let Some(slot) = widget.items.get(index) else {
            return;
        };
        if is_placeholder(slot.item_id) {
            return;
        }
        self.commands.push(DrawCommand::Rect {
            rect: slot.bounds,
            stroke: Some(palette::ORANGE),
            fill: None,
        });
        if slot.item_id != -1 {
            self.centered_text(slot.bounds, &slot.item_id.to_string(), palette::YELLOW);
        }
    }
}

fn is_placeholder(item_id: i32) -> bool {
    item_id == ITEM_EMPTY || item_id == ITEM_FILLED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, Viewport};
    use crate::scene::FlatGround;
    use nalgebra::Point3;

    /// Eight pixels per character, twelve-pixel lines.
    struct FixedWidth;

    impl TextMetrics for FixedWidth {
        fn text_width(&self, text: &str) -> i32 {
            text.chars().count() as i32 * 8
        }

        fn text_height(&self) -> i32 {
            12
        }
    }

    const PLAYER_AT: LocalPoint = LocalPoint { x: 3200, y: 3200 };

    fn camera() -> CameraState {
        CameraState::new(Point3::new(3200, 3200, -2000), 512, 0, 512, Viewport::new(765, 503))
            .unwrap()
    }

    fn marker(kind: ActorKind, name: &str, local: LocalPoint) -> ActorMarker<'static> {
        ActorMarker {
            kind,
            name: name.to_owned(),
            local,
            orientation: 0,
            logical_height: 200,
            animation: -1,
            graphic: -1,
            model: None,
            wireframe: Vec::new(),
        }
    }

    fn texts(commands: &[DrawCommand]) -> Vec<(&str, Rgba)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } if *color != palette::BLACK => {
                    Some((text.as_str(), *color))
                }
                _ => None,
            })
            .collect()
    }

    fn plan(scene: &OverlayScene<'_>, toggles: &OverlayToggles) -> Vec<DrawCommand> {
        let camera = camera();
        let view = SceneView::new(&camera, &FlatGround, 0);
        plan_overlay(scene, &view, toggles, &FixedWidth)
    }

    #[test]
    fn test_actor_labels_and_colors() {
        let scene = OverlayScene {
            actors: vec![
                marker(ActorKind::LocalPlayer, "me", PLAYER_AT),
                marker(ActorKind::Player, "other", LocalPoint::new(3328, 3200)),
                marker(ActorKind::Npc { id: 3029, combat_level: 2 }, "Goblin", LocalPoint::new(3200, 3328)),
                marker(ActorKind::Npc { id: 394, combat_level: 0 }, "Banker", LocalPoint::new(3072, 3200)),
            ],
            local_player: Some(0),
            ..Default::default()
        };
        let commands = plan(&scene, &OverlayToggles::default());
        assert_eq!(
            texts(&commands),
            vec![
                ("other (A: -1) (G: -1)", palette::BLUE),
                ("me (A: -1) (G: -1)", palette::CYAN),
                ("Goblin (ID: 3029) (A: -1) (G: -1)", palette::YELLOW),
                ("Banker (ID: 394) (A: -1) (G: -1)", palette::ORANGE),
            ]
        );
        let polygons = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { fill: Some(_), .. }))
            .count();
        assert_eq!(polygons, 4);
    }

    #[test]
    fn test_label_shadow_precedes_text() {
        let scene = OverlayScene {
            actors: vec![marker(ActorKind::LocalPlayer, "me", PLAYER_AT)],
            local_player: Some(0),
            ..Default::default()
        };
        let commands = plan(&scene, &OverlayToggles::default());
        let (shadow, text) = match &commands[1..] {
            [DrawCommand::Text { at: s, color: sc, .. }, DrawCommand::Text { at: t, .. }] => {
                assert_eq!(*sc, palette::BLACK);
                (*s, *t)
            }
            other => panic!("unexpected commands {other:?}"),
        };
        assert_eq!(shadow, ScreenPoint::new(text.x + 1, text.y + 1));
    }

    #[test]
    fn test_toggles_disable_groups() {
        let scene = OverlayScene {
            actors: vec![
                marker(ActorKind::LocalPlayer, "me", PLAYER_AT),
                marker(ActorKind::Npc { id: 1, combat_level: 3 }, "Rat", LocalPoint::new(3328, 3328)),
            ],
            local_player: Some(0),
            ..Default::default()
        };
        let toggles = OverlayToggles {
            players: false,
            ..OverlayToggles::default()
        };
        let commands = plan(&scene, &toggles);
        assert_eq!(texts(&commands), vec![("Rat (ID: 1) (A: -1) (G: -1)", palette::YELLOW)]);
    }

    #[test]
    fn test_tile_objects_respect_distance() {
        let cube = Model::cube(40);
        let scene = OverlayScene {
            actors: vec![marker(ActorKind::LocalPlayer, "me", PLAYER_AT)],
            local_player: Some(0),
            tile_objects: vec![
                TileObjectMarker {
                    kind: TileObjectKind::GameObject,
                    id: 1276,
                    local: LocalPoint::new(3456, 3200),
                    orientation: 0,
                    model: Some(&cube),
                },
                TileObjectMarker {
                    kind: TileObjectKind::GroundItem { quantity: 3 },
                    id: 995,
                    local: LocalPoint::new(3200, 3456),
                    orientation: 0,
                    model: None,
                },
                TileObjectMarker {
                    kind: TileObjectKind::Wall,
                    id: 1902,
                    local: LocalPoint::new(3200 + MAX_DISTANCE + 64, 3200),
                    orientation: 0,
                    model: None,
                },
            ],
            ..Default::default()
        };
        let toggles = OverlayToggles {
            players: false,
            ..OverlayToggles::default()
        };
        let commands = plan(&scene, &toggles);
        assert_eq!(
            texts(&commands),
            vec![("ID: 1276", palette::GREEN), ("ID: 995 Qty:3", palette::RED)]
        );
        let hulls = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { fill: None, stroke, .. } if *stroke == palette::GREEN))
            .count();
        assert_eq!(hulls, 1);
    }

    #[test]
    fn test_tile_objects_need_local_player() {
        let scene = OverlayScene {
            tile_objects: vec![TileObjectMarker {
                kind: TileObjectKind::GroundObject,
                id: 7,
                local: PLAYER_AT,
                orientation: 0,
                model: None,
            }],
            ..Default::default()
        };
        assert!(plan(&scene, &OverlayToggles::default()).is_empty());
    }

    #[test]
    fn test_projectile_labels() {
        let scene = OverlayScene {
            actors: vec![
                marker(ActorKind::LocalPlayer, "me", PLAYER_AT),
                marker(ActorKind::Npc { id: 2, combat_level: 5 }, "Wizard", LocalPoint::new(3456, 3456)),
            ],
            local_player: Some(0),
            projectiles: vec![
                ProjectileMarker {
                    id: 91,
                    origin: LocalPoint::new(3456, 3456),
                    target: Some(0),
                },
                ProjectileMarker {
                    id: 92,
                    origin: LocalPoint::new(3328, 3328),
                    target: None,
                },
            ],
            ..Default::default()
        };
        let toggles = OverlayToggles {
            players: false,
            npcs: false,
            ..OverlayToggles::default()
        };
        let commands = plan(&scene, &toggles);
        assert_eq!(
            texts(&commands),
            vec![("Targeted (T: me) (ID: 91)", palette::PROJECTILE)]
        );
        let red_tiles = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { stroke, .. } if *stroke == palette::PROJECTILE))
            .count();
        // Both origins plus the target's tile.
        assert_eq!(red_tiles, 3);
    }

    #[test]
    fn test_inventory_slots_centre_ids() {
        let scene = OverlayScene {
            inventory: Some(vec![InventorySlot {
                bounds: Rect::new(100, 200, 36, 32),
                item_id: 4151,
            }]),
            ..Default::default()
        };
        let toggles = OverlayToggles {
            inventory: true,
            ..OverlayToggles::default()
        };
        let commands = plan(&scene, &toggles);
        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                rect: Rect::new(100, 200, 36, 32),
                stroke: None,
                fill: Some(palette::WHITE.with_alpha(65)),
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Text {
                at: ScreenPoint::new(100 + 18 - 16, 200 + 16 + 6),
                text: "4151".into(),
                color: palette::YELLOW,
            }
        );
    }

    #[test]
    fn test_selected_widget_skips_placeholders() {
        let slots = vec![
            InventorySlot {
                bounds: Rect::new(0, 0, 10, 10),
                item_id: ITEM_EMPTY,
            },
            InventorySlot {
                bounds: Rect::new(10, 0, 10, 10),
                item_id: 526,
            },
        ];
        let widget = |item_index| SelectedWidget {
            bounds: Rect::new(0, 0, 100, 50),
            item_id: ITEM_FILLED,
            item_index,
            items: slots.clone(),
        };

        let only_bounds = OverlayScene {
            selected_widget: Some(widget(None)),
            ..Default::default()
        };
        assert_eq!(plan(&only_bounds, &OverlayToggles::default()).len(), 1);

        let empty_slot = OverlayScene {
            selected_widget: Some(widget(Some(0))),
            ..Default::default()
        };
        assert_eq!(plan(&empty_slot, &OverlayToggles::default()).len(), 1);

        let bones = OverlayScene {
            selected_widget: Some(widget(Some(1))),
            ..Default::default()
        };
        let commands = plan(&bones, &OverlayToggles::default());
        assert_eq!(texts(&commands), vec![("526", palette::YELLOW)]);
        assert!(commands.contains(&DrawCommand::Rect {
            rect: Rect::new(10, 0, 10, 10),
            stroke: Some(palette::ORANGE),
            fill: None,
        }));
    }

    #[test]
    fn test_toggles_from_partial_json() {
        let toggles: OverlayToggles =
            serde_json::from_str(r#"{ "walls": false, "inventory": true }"#).unwrap();
        assert!(!toggles.walls);
        assert!(toggles.inventory);
        assert!(toggles.players);
    }
}
