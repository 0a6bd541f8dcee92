/// Derived geometry and bookkeeping for host entities
///
/// Host objects (players, NPCs, scene objects) plug in by implementing
/// [`EntityGeometry`]; everything drawable about them is derived from their
/// position, facing and current model.
use crate::geometry::{Model, Polygon, ScreenPoint};
use crate::minimap::{world_to_minimap, Minimap};
use crate::projection::{canvas_image_location, canvas_text_location, canvas_tile_poly, SceneView};
use crate::scene::{LocalPoint, SceneBase, WorldPoint};
use crate::silhouette::compute_scene_silhouette;

/// Raw interacting indices at or above this refer to players.
pub const PLAYER_INDEX_OFFSET: i32 = 0x8000;

/// A reference to an actor by its slot in the host's cached actor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorRef {
    Npc(usize),
    Player(usize),
}

impl ActorRef {
    /// Decode the host's packed interacting target: `-1` is nobody,
    /// values below `0x8000` index NPCs and the rest index players.
    pub fn decode_interacting(raw: i32) -> Option<Self> {
        match raw {
            r if r < 0 => None,
            r if r < PLAYER_INDEX_OFFSET => Some(ActorRef::Npc(r as usize)),
            r => Some(ActorRef::Player((r - PLAYER_INDEX_OFFSET) as usize)),
        }
    }

    /// Look the reference up in the host's cached tables.
    pub fn resolve<'a, N, P>(
        &self,
        npcs: &'a [Option<N>],
        players: &'a [Option<P>],
    ) -> Option<Resolved<'a, N, P>> {
        match *self {
            ActorRef::Npc(i) => npcs.get(i)?.as_ref().map(Resolved::Npc),
            ActorRef::Player(i) => players.get(i)?.as_ref().map(Resolved::Player),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolved<'a, N, P> {
    Npc(&'a N),
    Player(&'a P),
}

/// The head of an actor's health bar, when the host has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatInfo {
    pub health_ratio: Option<i32>,
    pub health_scale: Option<i32>,
}

/// Geometry derived from an entity's position, facing and model.
pub trait EntityGeometry {
    fn local_x(&self) -> i32;
    fn local_y(&self) -> i32;
    /// Facing in 2048-unit circle angles.
    fn orientation(&self) -> i32;
    /// The current animation frame, if the entity has one loaded.
    fn model(&self) -> Option<&Model>;

    fn combat_info(&self) -> Option<&CombatInfo> {
        None
    }

    fn local_location(&self) -> LocalPoint {
        LocalPoint::new(self.local_x(), self.local_y())
    }

    fn world_location(&self, base: SceneBase, plane: i32) -> WorldPoint {
        WorldPoint::from_local(base, self.local_location(), plane)
    }

    fn canvas_tile_poly(&self, view: &SceneView<'_>) -> Option<Polygon> {
        canvas_tile_poly(view, self.local_location())
    }

    fn canvas_text_location(
        &self,
        view: &SceneView<'_>,
        text_width: i32,
        z_offset: i32,
    ) -> Option<ScreenPoint> {
        canvas_text_location(view, self.local_location(), text_width, z_offset)
    }

    fn canvas_image_location(
        &self,
        view: &SceneView<'_>,
        size: (i32, i32),
        z_offset: i32,
    ) -> Option<ScreenPoint> {
        canvas_image_location(view, self.local_location(), size, z_offset)
    }

    fn minimap_location(&self, minimap: &Minimap) -> Option<ScreenPoint> {
        world_to_minimap(minimap, self.local_x(), self.local_y())
    }

    /// The outline of the current model on the canvas.
    fn convex_hull(&self, view: &SceneView<'_>) -> Option<Polygon> {
        let model = self.model()?;
        compute_scene_silhouette(model, self.orientation(), self.local_location(), view)
    }

    fn health_ratio(&self) -> Option<i32> {
        self.combat_info()?.health_ratio
    }

    fn health(&self) -> Option<i32> {
        self.combat_info()?.health_scale
    }
}

/// Notifications raised when the host writes an actor's animation or
/// graphic (spot animation) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorEvent {
    AnimationChanged { actor: ActorRef, animation: i32 },
    GraphicChanged { actor: ActorRef, graphic: i32 },
}

pub trait ActorObserver {
    fn on_actor_event(&mut self, event: &ActorEvent);
}

impl<F: FnMut(&ActorEvent)> ActorObserver for F {
    fn on_actor_event(&mut self, event: &ActorEvent) {
        self(event)
    }
}

/// Fans actor events out to registered observers in registration order.
#[derive(Default)]
pub struct ActorEvents {
    observers: Vec<Box<dyn ActorObserver + Send>>,
}

impl ActorEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ActorObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn animation_changed(&mut self, actor: ActorRef, animation: i32) {
        self.post(ActorEvent::AnimationChanged { actor, animation });
    }

    pub fn graphic_changed(&mut self, actor: ActorRef, graphic: i32) {
        self.post(ActorEvent::GraphicChanged { actor, graphic });
    }

    pub fn post(&mut self, event: ActorEvent) {
        tracing::trace!(?event, observers = self.observers.len(), "actor event");
        for observer in &mut self.observers {
            observer.on_actor_event(&event);
        }
    }
}
