/// Terminal front-end for the devlay overlay
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use devlay_core::overlay::palette;
use devlay_core::{
    plan_overlay, ActorEvent, CameraError, CameraState, DrawCommand, EntityGeometry, Minimap,
    OverlayScene, OverlayToggles, SceneView, ScreenPoint, Viewport,
};
use std::io::{self, stdout, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub mod config;
pub mod demo;
pub mod renderer;

pub use config::{DemoConfig, OrbitSettings};
pub use demo::DemoScene;
pub use renderer::{AsciiCanvas, CellMetrics};

/// Squared minimap radius in canvas pixels, small enough for a corner.
const MINIMAP_RADIUS_SQ: i32 = 144;
const MINIMAP_MARGIN: i32 = 14;

/// Plan and rasterize one overlay frame onto `canvas`, returning how many
/// draw commands it took.
pub fn render_frame(
    scene: &DemoScene,
    orbit: &OrbitSettings,
    toggles: &OverlayToggles,
    canvas: &mut AsciiCanvas,
) -> Result<usize, CameraError> {
    let (width, height) = canvas.pixel_size();
    let camera = CameraState::orbit(
        scene.focus(),
        orbit.distance,
        orbit.pitch,
        orbit.yaw,
        orbit.scale,
        Viewport::new(width, height),
    )?;
    let view = SceneView::new(&camera, scene.heights(), 0);
    let snapshot = scene.overlay_scene(&view);

    let mut commands = plan_overlay(&snapshot, &view, toggles, &CellMetrics);
    commands.extend(minimap_commands(&snapshot, &camera));

    canvas.clear();
    canvas.apply(&commands);
    Ok(commands.len())
}

/// Dots for every actor on a minimap in the top-right corner, turned with
/// the camera.
fn minimap_commands(scene: &OverlayScene<'_>, camera: &CameraState) -> Vec<DrawCommand> {
    let Some(player) = scene.local_player.and_then(|i| scene.actors.get(i)) else {
        return Vec::new();
    };
    let viewport = camera.viewport();
    let mut minimap = Minimap::new(
        ScreenPoint::new(viewport.width - MINIMAP_MARGIN, MINIMAP_MARGIN),
        player.local,
        camera.yaw(),
    );
    minimap.radius_sq = MINIMAP_RADIUS_SQ;

    scene
        .actors
        .iter()
        .enumerate()
        .filter_map(|(i, actor)| {
            let at = actor.minimap_location(&minimap)?;
            let (mark, color) = if Some(i) == scene.local_player {
                ('@', palette::WHITE)
            } else {
                ('o', palette::YELLOW)
            };
            // Text sits above its baseline, so drop it a pixel.
            Some(DrawCommand::Text {
                at: ScreenPoint::new(at.x, at.y + 1),
                text: mark.to_string(),
                color,
            })
        })
        .collect()
}

/// Main application struct for the interactive overlay demo
pub struct TerminalApp {
    scene: DemoScene,
    config: DemoConfig,
    canvas: AsciiCanvas,
    running: bool,
    paused: bool,
    commands: usize,
    last_event: Arc<Mutex<Option<ActorEvent>>>,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mut scene: DemoScene, config: DemoConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let last_event = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last_event);
        scene.events_mut().subscribe(move |event: &ActorEvent| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(*event);
            }
        });

        Ok(Self {
            scene,
            config,
            canvas: canvas_for(width, height),
            running: true,
            paused: false,
            commands: 0,
            last_event,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => self.handle_key(code),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                self.canvas = canvas_for(width, height);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        let orbit = &mut self.config.camera;
        let toggles = &mut self.config.toggles;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Left => orbit.rotate(-32, 0),
            KeyCode::Right => orbit.rotate(32, 0),
            KeyCode::Up => orbit.rotate(0, 16),
            KeyCode::Down => orbit.rotate(0, -16),
            KeyCode::Char('w') => orbit.dolly(-100),
            KeyCode::Char('s') => orbit.dolly(100),
            KeyCode::Char('+') | KeyCode::Char('=') => orbit.zoom(10),
            KeyCode::Char('-') => orbit.zoom(-10),
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('p') => toggles.players = !toggles.players,
            KeyCode::Char('n') => toggles.npcs = !toggles.npcs,
            KeyCode::Char('o') => {
                let on = !toggles.game_objects;
                toggles.game_objects = on;
                toggles.ground_objects = on;
                toggles.ground_items = on;
                toggles.walls = on;
                toggles.decorations = on;
            }
            KeyCode::Char('r') => toggles.projectiles = !toggles.projectiles,
            _ => {}
        }
    }

    fn update(&mut self) {
        if !self.paused {
            self.scene.advance(self.config.spin_speed);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.commands = render_frame(
            &self.scene,
            &self.config.camera,
            &self.config.toggles,
            &mut self.canvas,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut stdout)?;

        let orbit = &self.config.camera;
        let event = match self.last_event.lock() {
            Ok(slot) => (*slot).map(|e| format!(" | {e:?}")).unwrap_or_default(),
            Err(_) => String::new(),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, self.canvas.size().1 as u16),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "devlay | FPS: {:.1} | yaw {} pitch {} scale {} | {} cmds{}",
                self.fps, orbit.yaw, orbit.pitch, orbit.scale, self.commands, event
            )),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// A canvas filling the terminal with one row kept for the status line.
fn canvas_for(columns: u16, rows: u16) -> AsciiCanvas {
    AsciiCanvas::new(usize::from(columns.max(1)), usize::from(rows.saturating_sub(1).max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_draws_overlay() {
        let scene = DemoScene::default();
        let config = DemoConfig::default();
        let mut canvas = AsciiCanvas::new(120, 40);
        let commands =
            render_frame(&scene, &config.camera, &config.toggles, &mut canvas).unwrap();
        assert!(commands > 0);
        let text = canvas.to_plain_string();
        // The projectile label is drawn last, over the local player.
        assert!(text.contains("Targeted (T: devlay) (ID: 91)"), "{text}");
        assert!(text.contains('+'), "{text}");
        assert!(text.contains('@'), "{text}");
    }

    #[test]
    fn test_toggles_hide_labels() {
        let scene = DemoScene::default();
        let config = DemoConfig::default();
        let toggles = OverlayToggles {
            players: false,
            npcs: false,
            projectiles: false,
            ..config.toggles
        };
        let mut canvas = AsciiCanvas::new(120, 40);
        render_frame(&scene, &config.camera, &toggles, &mut canvas).unwrap();
        let text = canvas.to_plain_string();
        assert!(!text.contains("Goblin"), "{text}");
        assert!(!text.contains("devlay"), "{text}");
        assert!(text.contains("ID: 1276"), "{text}");
    }

    #[test]
    fn test_minimap_marks_local_player_at_centre() {
        let scene = DemoScene::default();
        let camera = CameraState::orbit(scene.focus(), 1400, 320, 0, 90, Viewport::new(120, 80))
            .unwrap();
        let view = SceneView::new(&camera, scene.heights(), 0);
        let snapshot = scene.overlay_scene(&view);
        let commands = minimap_commands(&snapshot, &camera);
        assert!(commands.contains(&DrawCommand::Text {
            at: ScreenPoint::new(120 - MINIMAP_MARGIN, MINIMAP_MARGIN + 1),
            text: "@".into(),
            color: palette::WHITE,
        }));
    }

    #[test]
    fn test_canvas_for_tiny_terminal() {
        assert_eq!(canvas_for(0, 0).size(), (1, 1));
        assert_eq!(canvas_for(80, 24).size(), (80, 23));
    }
}
