//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use filmstrip::commands::{Cmd, Timer};
use filmstrip::external::{
    Canvas, DataSource, EdgeGlow, PositionSolver, ScreenNail, TapListener, TileRenderer,
};
use filmstrip::geometry::{Edges, RectF, Rotation};
use filmstrip::messages::SlideDirection;
use filmstrip::{Pager, PagerConfig};

// ============================================================================
// Screen-nail probe
// ============================================================================

/// Observable side of a fake screen-nail, shared with the test
#[derive(Debug, Default)]
pub struct NailProbe {
    pub draws: RefCell<Vec<(i32, i32, i32, i32)>>,
    pub paused: Cell<usize>,
    pub no_draws: Cell<usize>,
}

pub struct FakeNail {
    pub width: i32,
    pub height: i32,
    pub rotation: Rotation,
    pub probe: Rc<NailProbe>,
}

impl FakeNail {
    pub fn boxed(width: i32, height: i32) -> Box<dyn ScreenNail> {
        Box::new(FakeNail {
            width,
            height,
            rotation: Rotation::Deg0,
            probe: Rc::new(NailProbe::default()),
        })
    }

    pub fn probed(width: i32, height: i32) -> (Box<dyn ScreenNail>, Rc<NailProbe>) {
        let probe = Rc::new(NailProbe::default());
        let nail = FakeNail {
            width,
            height,
            rotation: Rotation::Deg0,
            probe: probe.clone(),
        };
        (Box::new(nail), probe)
    }
}

impl ScreenNail for FakeNail {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn draw(&mut self, _canvas: &mut dyn Canvas, x: i32, y: i32, width: i32, height: i32) {
        self.probe.draws.borrow_mut().push((x, y, width, height));
    }

    fn no_draw(&mut self) {
        self.probe.no_draws.set(self.probe.no_draws.get() + 1);
    }

    fn pause_draw(&mut self) {
        self.probe.paused.set(self.probe.paused.get() + 1);
    }
}

// ============================================================================
// Position solver mock
// ============================================================================

#[derive(Debug)]
pub struct SolverState {
    pub view: (i32, i32),
    pub image: (i32, i32),
    pub bounds: RectF,
    pub scale: f32,
    pub minimal: bool,
    pub edges: Edges,
    pub accepts_fling: bool,
    pub out_of_range: bool,

    pub horizontal_slides: Vec<i32>,
    pub slide_ins: Vec<SlideDirection>,
    pub scrolls: Vec<(f32, f32, bool, bool)>,
    pub flings: Vec<(f32, f32)>,
    pub zoom_ins: Vec<(f32, f32, f32)>,
    pub resets: usize,
    pub ups: usize,
    pub begin_scales: usize,
    pub end_scales: usize,
    pub scale_bys: Vec<f32>,
    pub extra_scaling: Vec<bool>,
    pub stop_animations: usize,
    pub skip_animations: usize,
    pub advances: usize,
    pub image_sizes: Vec<(i32, i32)>,
}

impl Default for SolverState {
    fn default() -> Self {
        Self {
            view: (1000, 800),
            image: (800, 600),
            bounds: RectF::new(100.0, 100.0, 900.0, 700.0),
            scale: 1.0,
            minimal: true,
            edges: Edges::all(),
            accepts_fling: false,
            out_of_range: false,
            horizontal_slides: Vec::new(),
            slide_ins: Vec::new(),
            scrolls: Vec::new(),
            flings: Vec::new(),
            zoom_ins: Vec::new(),
            resets: 0,
            ups: 0,
            begin_scales: 0,
            end_scales: 0,
            scale_bys: Vec::new(),
            extra_scaling: Vec::new(),
            stop_animations: 0,
            skip_animations: 0,
            advances: 0,
            image_sizes: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct SharedSolver(pub Rc<RefCell<SolverState>>);

impl PositionSolver for SharedSolver {
    fn set_view_size(&mut self, width: i32, height: i32) {
        self.0.borrow_mut().view = (width, height);
    }

    fn set_image_size(&mut self, width: i32, height: i32) {
        let mut s = self.0.borrow_mut();
        s.image = (width, height);
        s.image_sizes.push((width, height));
    }

    fn image_bounds(&self) -> RectF {
        self.0.borrow().bounds
    }

    fn image_width(&self) -> i32 {
        self.0.borrow().image.0
    }

    fn image_height(&self) -> i32 {
        self.0.borrow().image.1
    }

    fn current_scale(&self) -> f32 {
        self.0.borrow().scale
    }

    fn is_at_minimal_scale(&self) -> bool {
        self.0.borrow().minimal
    }

    fn minimal_scale(&self, width: i32, height: i32) -> f32 {
        let s = self.0.borrow();
        let (vw, vh) = s.view;
        if width <= 0 || height <= 0 {
            return 1.0;
        }
        (vw as f32 / width as f32).min(vh as f32 / height as f32)
    }

    fn image_at_edges(&self) -> Edges {
        self.0.borrow().edges
    }

    fn start_horizontal_slide(&mut self, offset: i32) {
        self.0.borrow_mut().horizontal_slides.push(offset);
    }

    fn start_slide_in(&mut self, direction: SlideDirection) {
        self.0.borrow_mut().slide_ins.push(direction);
    }

    fn start_scroll(&mut self, dx: f32, dy: f32, has_next: bool, has_prev: bool) {
        self.0.borrow_mut().scrolls.push((dx, dy, has_next, has_prev));
    }

    fn fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool {
        let mut s = self.0.borrow_mut();
        s.flings.push((velocity_x, velocity_y));
        s.accepts_fling
    }

    fn up(&mut self) {
        self.0.borrow_mut().ups += 1;
    }

    fn begin_scale(&mut self, _focus_x: f32, _focus_y: f32) {
        self.0.borrow_mut().begin_scales += 1;
    }

    fn scale_by(&mut self, factor: f32, _focus_x: f32, _focus_y: f32) -> bool {
        let mut s = self.0.borrow_mut();
        s.scale_bys.push(factor);
        s.out_of_range
    }

    fn end_scale(&mut self) {
        self.0.borrow_mut().end_scales += 1;
    }

    fn zoom_in(&mut self, focus_x: f32, focus_y: f32, scale: f32) {
        self.0.borrow_mut().zoom_ins.push((focus_x, focus_y, scale));
    }

    fn reset_to_full_view(&mut self) {
        self.0.borrow_mut().resets += 1;
    }

    fn set_extra_scaling_range(&mut self, enabled: bool) {
        self.0.borrow_mut().extra_scaling.push(enabled);
    }

    fn advance_animation(&mut self) {
        self.0.borrow_mut().advances += 1;
    }

    fn stop_animation(&mut self) {
        self.0.borrow_mut().stop_animations += 1;
    }

    fn skip_animation(&mut self) {
        self.0.borrow_mut().skip_animations += 1;
    }
}

// ============================================================================
// Tile renderer mock
// ============================================================================

#[derive(Default)]
pub struct TileState {
    pub positions: Vec<(i32, i32, f32, Rotation)>,
    pub alphas: Vec<f32>,
    pub invalidations: usize,
    pub tile_invalidations: usize,
    pub image_size: (i32, i32),
    pub center: (i32, i32),
    pub draws: usize,
    pub freed: usize,
    pub prepared: usize,
    pub nail: Option<Box<dyn ScreenNail>>,
}

impl TileState {
    /// Size of the nail currently owned by the renderer, for identity
    /// checks after ownership swaps
    pub fn nail_size(&self) -> Option<(i32, i32)> {
        self.nail.as_ref().map(|n| n.size())
    }
}

#[derive(Clone)]
pub struct SharedTiles(pub Rc<RefCell<TileState>>);

impl TileRenderer for SharedTiles {
    fn set_position(&mut self, center_x: i32, center_y: i32, scale: f32, rotation: Rotation) {
        self.0
            .borrow_mut()
            .positions
            .push((center_x, center_y, scale, rotation));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.0.borrow_mut().alphas.push(alpha);
    }

    fn notify_model_invalidated(&mut self) {
        self.0.borrow_mut().invalidations += 1;
    }

    fn invalidate_tiles(&mut self) {
        self.0.borrow_mut().tile_invalidations += 1;
    }

    fn image_size(&self) -> (i32, i32) {
        self.0.borrow().image_size
    }

    fn image_center(&self) -> (i32, i32) {
        self.0.borrow().center
    }

    fn take_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>> {
        self.0.borrow_mut().nail.take()
    }

    fn put_screen_nail(&mut self, nail: Option<Box<dyn ScreenNail>>) {
        self.0.borrow_mut().nail = nail;
    }

    fn draw(&mut self, _canvas: &mut dyn Canvas) {
        self.0.borrow_mut().draws += 1;
    }

    fn free_textures(&mut self) {
        self.0.borrow_mut().freed += 1;
    }

    fn prepare_textures(&mut self) {
        self.0.borrow_mut().prepared += 1;
    }
}

// ============================================================================
// Data source mock
// ============================================================================

pub struct SourceState {
    pub nexts: usize,
    pub prevs: usize,
    pub jumps: Vec<usize>,
    pub rotation: Rotation,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_size: (i32, i32),
    pub next_size: (i32, i32),
    pub level_count: usize,
    pub has_nail: bool,
    pub failed: bool,
}

impl Default for SourceState {
    fn default() -> Self {
        Self {
            nexts: 0,
            prevs: 0,
            jumps: Vec::new(),
            rotation: Rotation::Deg0,
            has_prev: true,
            has_next: true,
            prev_size: (800, 600),
            next_size: (800, 600),
            level_count: 1,
            has_nail: true,
            failed: false,
        }
    }
}

#[derive(Clone)]
pub struct SharedSource(pub Rc<RefCell<SourceState>>);

impl DataSource for SharedSource {
    fn next(&mut self) {
        self.0.borrow_mut().nexts += 1;
    }

    fn previous(&mut self) {
        self.0.borrow_mut().prevs += 1;
    }

    fn jump_to(&mut self, index: usize) {
        self.0.borrow_mut().jumps.push(index);
    }

    fn image_rotation(&self) -> Rotation {
        self.0.borrow().rotation
    }

    fn next_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>> {
        let s = self.0.borrow();
        if s.has_next {
            let (w, h) = s.next_size;
            Some(FakeNail::boxed(w, h))
        } else {
            None
        }
    }

    fn prev_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>> {
        let s = self.0.borrow();
        if s.has_prev {
            let (w, h) = s.prev_size;
            Some(FakeNail::boxed(w, h))
        } else {
            None
        }
    }

    fn level_count(&self) -> usize {
        self.0.borrow().level_count
    }

    fn has_screen_nail(&self) -> bool {
        self.0.borrow().has_nail
    }

    fn failed_to_load(&self) -> bool {
        self.0.borrow().failed
    }
}

// ============================================================================
// Edge glow, tap listener, canvas
// ============================================================================

#[derive(Clone, Default)]
pub struct SharedEdge(pub Rc<Cell<usize>>);

impl EdgeGlow for SharedEdge {
    fn on_release(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct TapRecorder(pub Rc<RefCell<Vec<(i32, i32)>>>);

impl TapListener for TapRecorder {
    fn on_single_tap_up(&mut self, x: i32, y: i32) {
        self.0.borrow_mut().push((x, y));
    }
}

/// Canvas that records every call, for render-order assertions
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Save,
    Restore,
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32),
    MultiplyAlpha(f32),
    Spinner(i32, i32),
    LoadingLabel(i32, i32),
    FailureLabel(i32, i32),
    PlayIcon(i32, i32, i32),
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::Translate(x, y));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(CanvasOp::Scale(sx, sy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.ops.push(CanvasOp::Rotate(degrees));
    }

    fn multiply_alpha(&mut self, alpha: f32) {
        self.ops.push(CanvasOp::MultiplyAlpha(alpha));
    }

    fn draw_spinner(&mut self, cx: i32, cy: i32) {
        self.ops.push(CanvasOp::Spinner(cx, cy));
    }

    fn draw_loading_label(&mut self, cx: i32, y: i32) {
        self.ops.push(CanvasOp::LoadingLabel(cx, y));
    }

    fn draw_failure_label(&mut self, cx: i32, y: i32) {
        self.ops.push(CanvasOp::FailureLabel(cx, y));
    }

    fn draw_video_play_icon(&mut self, x: i32, y: i32, size: i32) {
        self.ops.push(CanvasOp::PlayIcon(x, y, size));
    }
}

// ============================================================================
// Timer simulation
// ============================================================================

/// Minimal host scheduler: tracks which one-shot timers a command stream
/// leaves pending
#[derive(Debug, Default)]
pub struct TimerSim {
    pending: Vec<Timer>,
}

impl TimerSim {
    pub fn apply(&mut self, cmd: &Cmd) {
        match cmd {
            Cmd::Schedule { timer, .. } => {
                self.pending.retain(|t| t != timer);
                self.pending.push(*timer);
            }
            Cmd::Cancel(timer) => {
                self.pending.retain(|t| t != timer);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.apply(cmd);
                }
            }
            _ => {}
        }
    }

    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.contains(&timer)
    }

    /// Consume a pending timer; returns false if it was not armed
    pub fn fire(&mut self, timer: Timer) -> bool {
        let was_pending = self.is_pending(timer);
        self.pending.retain(|t| *t != timer);
        was_pending
    }
}

/// Flatten nested batches for order-insensitive assertions
pub fn flatten(cmd: &Cmd) -> Vec<Cmd> {
    match cmd {
        Cmd::Batch(cmds) => cmds.iter().flat_map(flatten).collect(),
        Cmd::None => Vec::new(),
        other => vec![other.clone()],
    }
}

pub fn schedules(cmd: &Cmd, timer: Timer) -> Vec<u64> {
    flatten(cmd)
        .into_iter()
        .filter_map(|c| match c {
            Cmd::Schedule {
                timer: t,
                delay_ms,
            } if t == timer => Some(delay_ms),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Rig
// ============================================================================

/// A pager wired to shared-state mocks the test can inspect
pub struct Rig {
    pub pager: Pager,
    pub solver: Rc<RefCell<SolverState>>,
    pub tiles: Rc<RefCell<TileState>>,
    pub source: Rc<RefCell<SourceState>>,
    pub edge: Rc<Cell<usize>>,
    pub taps: Rc<RefCell<Vec<(i32, i32)>>>,
}

/// Pager with a data source attached, laid out at 1000x800, current
/// image 800x600 centered
pub fn rig() -> Rig {
    let solver = Rc::new(RefCell::new(SolverState::default()));
    let tiles = Rc::new(RefCell::new(TileState {
        image_size: (800, 600),
        center: (500, 400),
        nail: Some(FakeNail::boxed(800, 600)),
        ..TileState::default()
    }));
    let source = Rc::new(RefCell::new(SourceState::default()));
    let edge = Rc::new(Cell::new(0));
    let taps = Rc::new(RefCell::new(Vec::new()));

    let mut pager = Pager::new(
        Box::new(SharedSolver(solver.clone())),
        Box::new(SharedTiles(tiles.clone())),
        Box::new(SharedEdge(edge.clone())),
        PagerConfig::default(),
    );
    pager.set_model(Some(Box::new(SharedSource(source.clone()))));
    pager.set_tap_listener(Some(Box::new(TapRecorder(taps.clone()))));
    pager.layout(1000, 800);

    Rig {
        pager,
        solver,
        tiles,
        source,
        edge,
        taps,
    }
}

impl Rig {
    /// Fill both neighbor slots from the source and lay them out
    pub fn load_neighbors(&mut self) {
        self.pager
            .notify_image_invalidated(filmstrip::ImageSlot::Previous);
        self.pager
            .notify_image_invalidated(filmstrip::ImageSlot::Next);
    }
}
