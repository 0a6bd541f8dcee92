/// A small hand-built scene for the terminal demo
use devlay_core::actor::Resolved;
use devlay_core::overlay::{
    ActorKind, ActorMarker, ProjectileMarker, TileObjectKind, TileObjectMarker,
};
use devlay_core::{
    ActorEvent, ActorEvents, ActorRef, EntityGeometry, HeightMap, LocalPoint, Model, OverlayScene,
    SceneView, Spin, TileHeights,
};
use nalgebra::Point3;

pub const LOCAL_PLAYER: usize = 0;
const GOBLIN: usize = 1;
const BANKER: usize = 2;
const OTHER_PLAYER: usize = 3;

/// Actor slots as the host would cache them, mapped to indices in
/// [`OverlayScene::actors`].
const NPC_SLOTS: [Option<usize>; 2] = [Some(GOBLIN), Some(BANKER)];
const PLAYER_SLOTS: [Option<usize>; 2] = [Some(LOCAL_PLAYER), Some(OTHER_PLAYER)];

/// The goblin's packed interacting target: player slot 0.
const GOBLIN_TARGET: i32 = devlay_core::actor::PLAYER_INDEX_OFFSET;

const PLAYER_TILE: (i32, i32) = (52, 52);
const GOBLIN_TILE: (i32, i32) = (54, 53);
const ALTAR_TILE: (i32, i32) = (56, 56);

const WAVE_ANIMATION: i32 = 863;
const IDLE_ANIMATION: i32 = -1;
const ANIMATION_PERIOD: u64 = 45;

/// Height of the camera focus above the player's feet.
const FOCUS_HEIGHT: i32 = 100;

pub struct DemoScene {
    player_model: Model,
    goblin_model: Model,
    altar_model: Model,
    statue_model: Model,
    heights: HeightMap,
    player_spin: Spin,
    goblin_spin: Spin,
    player_animation: i32,
    events: ActorEvents,
    tick: u64,
}

impl DemoScene {
    /// Build the scene. `player_model` replaces the default cube.
    pub fn new(player_model: Option<Model>) -> Self {
        let mut events = ActorEvents::new();
        events.subscribe(|event: &ActorEvent| tracing::debug!(?event, "actor changed"));

        Self {
            player_model: player_model.unwrap_or_else(|| Model::cube(48).translated(0, -48, 0)),
            goblin_model: Model::cube(32).translated(0, -32, 0),
            altar_model: Model::pyramid(56, 160),
            statue_model: Model::cube(20).translated(0, -20, 0),
            heights: hill(),
            player_spin: Spin::new(0),
            goblin_spin: Spin::new(1024),
            player_animation: IDLE_ANIMATION,
            events,
            tick: 0,
        }
    }

    pub fn heights(&self) -> &HeightMap {
        &self.heights
    }

    pub fn events_mut(&mut self) -> &mut ActorEvents {
        &mut self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player_location(&self) -> LocalPoint {
        LocalPoint::from_scene(PLAYER_TILE.0, PLAYER_TILE.1)
    }

    /// The point the camera orbits: just above the local player.
    pub fn focus(&self) -> Point3<i32> {
        let at = self.player_location();
        let ground = self.heights.tile_height(at, 0);
        Point3::new(at.x, at.y, ground - FOCUS_HEIGHT)
    }

    /// Step one frame: spin the models and flip the player's animation
    /// every few seconds.
    pub fn advance(&mut self, spin_speed: i32) {
        self.player_spin.turn(spin_speed);
        self.goblin_spin.turn(-spin_speed / 2);
        self.tick += 1;

        if self.tick % ANIMATION_PERIOD == 0 {
            self.player_animation = if self.player_animation == IDLE_ANIMATION {
                WAVE_ANIMATION
            } else {
                IDLE_ANIMATION
            };
            self.events
                .animation_changed(ActorRef::Player(0), self.player_animation);
        }
    }

    /// Snapshot the scene for the overlay planner. The local player's
    /// wireframe is its hull under `view`.
    pub fn overlay_scene(&self, view: &SceneView<'_>) -> OverlayScene<'_> {
        let mut player = ActorMarker {
            kind: ActorKind::LocalPlayer,
            name: "devlay".to_owned(),
            local: self.player_location(),
            orientation: self.player_spin.orientation,
            logical_height: 200,
            animation: self.player_animation,
            graphic: -1,
            model: Some(&self.player_model),
            wireframe: Vec::new(),
        };
        let hull = player.convex_hull(view);
        player.wireframe.extend(hull);

        let actors = vec![
            player,
            ActorMarker {
                kind: ActorKind::Npc {
                    id: 3029,
                    combat_level: 2,
                },
                name: "Goblin".to_owned(),
                local: LocalPoint::from_scene(GOBLIN_TILE.0, GOBLIN_TILE.1),
                orientation: self.goblin_spin.orientation,
                logical_height: 150,
                animation: -1,
                graphic: -1,
                model: Some(&self.goblin_model),
                wireframe: Vec::new(),
            },
            ActorMarker {
                kind: ActorKind::Npc {
                    id: 394,
                    combat_level: 0,
                },
                name: "Banker".to_owned(),
                local: LocalPoint::from_scene(49, 54),
                orientation: 1024,
                logical_height: 200,
                animation: -1,
                graphic: -1,
                model: None,
                wireframe: Vec::new(),
            },
            ActorMarker {
                kind: ActorKind::Player,
                name: "Zezima".to_owned(),
                local: LocalPoint::from_scene(50, 50),
                orientation: 512,
                logical_height: 200,
                animation: -1,
                graphic: 282,
                model: None,
                wireframe: Vec::new(),
            },
        ];

        let tile_objects = vec![
            TileObjectMarker {
                kind: TileObjectKind::GameObject,
                id: 409,
                local: LocalPoint::from_scene(ALTAR_TILE.0, ALTAR_TILE.1),
                orientation: 0,
                model: Some(&self.altar_model),
            },
            TileObjectMarker {
                kind: TileObjectKind::Wall,
                id: 1902,
                local: LocalPoint::from_scene(50, 52),
                orientation: 0,
                model: None,
            },
            TileObjectMarker {
                kind: TileObjectKind::GroundItem { quantity: 250 },
                id: 995,
                local: LocalPoint::from_scene(53, 51),
                orientation: 0,
                model: None,
            },
            TileObjectMarker {
                kind: TileObjectKind::Decoration,
                id: 2,
                local: LocalPoint::from_scene(51, 55),
                orientation: 256,
                model: Some(&self.statue_model),
            },
            TileObjectMarker {
                kind: TileObjectKind::GroundObject,
                id: 1276,
                local: LocalPoint::from_scene(48, 53),
                orientation: 0,
                model: None,
            },
        ];

        let projectiles = vec![ProjectileMarker {
            id: 91,
            origin: LocalPoint::from_scene(GOBLIN_TILE.0, GOBLIN_TILE.1),
            target: actor_index(GOBLIN_TARGET),
        }];

        OverlayScene {
            actors,
            local_player: Some(LOCAL_PLAYER),
            tile_objects,
            projectiles,
            inventory: None,
            selected_widget: None,
        }
    }
}

impl Default for DemoScene {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Resolve a packed interacting index against the demo's actor slots.
fn actor_index(raw: i32) -> Option<usize> {
    match ActorRef::decode_interacting(raw)?.resolve(&NPC_SLOTS, &PLAYER_SLOTS)? {
        Resolved::Npc(&i) | Resolved::Player(&i) => Some(i),
    }
}

/// A mound under the altar, highest at its centre and falling off by
/// tile rings.
fn hill() -> HeightMap {
    const PEAK: i32 = 180;
    const RING_DROP: i32 = 60;
    let mut heights = HeightMap::new();
    let (cx, cy) = (ALTAR_TILE.0 as usize, ALTAR_TILE.1 as usize);
    for x in cx - 3..=cx + 3 {
        for y in cy - 3..=cy + 3 {
            let ring = x.abs_diff(cx).max(y.abs_diff(cy)) as i32;
            let rise = (PEAK - RING_DROP * ring).max(0);
            heights.set_corner_height(0, x, y, -rise);
        }
    }
    heights
}
