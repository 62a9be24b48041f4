//! SceneView: rasterises a scene [`DrawList`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). World space maps onto a grid of character cells:
//! each maze cell becomes `cell_w x cell_h` characters and the banner takes one more
//! row of cells below the maze.

use glam::Vec2;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::scene::core::GameSnapshot;
use crate::scene::{sprite_info, DrawCommand, DrawList};
use crate::types::{
    Direction, MessageKind, Openings, SpriteId, COLUMN_PITCH, GRID_COLUMNS, GRID_HALF_WIDTH,
    GRID_ROWS, GRID_TOP, ROCK_COUNT, ROW_PITCH, CELL_COUNT,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Progress shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub cells_visited: u8,
    pub rocks_mined: u8,
    pub treasure_found: bool,
}

impl From<&GameSnapshot> for StatusView {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            cells_visited: snap.visited_count() as u8,
            rocks_mined: snap.mined_count() as u8,
            treasure_found: snap.treasure_found,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const CAVE_BG: Rgb = Rgb::new(28, 24, 22);
const WALL: CellStyle = CellStyle::new(Rgb::new(92, 78, 66), CAVE_BG).dim();
const CORRIDOR: CellStyle = CellStyle::new(Rgb::new(200, 180, 140), CAVE_BG);
const ROCK: CellStyle = CellStyle::new(Rgb::new(150, 150, 165), CAVE_BG).bold();
const PLAYER: CellStyle = CellStyle::new(Rgb::new(90, 220, 250), CAVE_BG).bold();
const TREASURE: CellStyle = CellStyle::new(Rgb::new(255, 210, 60), CAVE_BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

/// Integer character rectangle, `x1`/`y1` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Rect {
    fn center(&self) -> (i32, i32) {
        (
            self.x0 + (self.x1 - self.x0) / 2,
            self.y0 + (self.y1 - self.y0) / 2,
        )
    }
}

/// Terminal rasteriser for the miner scene.
#[derive(Debug, Clone)]
pub struct SceneView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for SceneView {
    fn default() -> Self {
        // 8x3 keeps a cell roughly as wide as the 0.4 x 0.286 world aspect.
        Self::new(8, 3)
    }
}

impl SceneView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered play area, in characters.
    pub fn frame_size(&self) -> (u16, u16) {
        let w = GRID_COLUMNS as u16 * self.cell_w + 2;
        // One extra row of cells for the banner.
        let h = (GRID_ROWS as u16 + 1) * self.cell_h + 2;
        (w, h)
    }

    /// Rasterise `list` into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(
        &self,
        list: &DrawList,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(VALUE.fg, BACKGROUND)));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        draw_border(fb, start_x as i32, start_y as i32, frame_w as i32, frame_h as i32);
        let origin = (start_x as i32 + 1, start_y as i32 + 1);

        for cmd in list {
            self.draw_command(fb, origin, cmd);
        }

        if let Some(status) = status {
            draw_side_panel(fb, status, viewport, start_x + frame_w + 2, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, list: &DrawList, status: Option<&StatusView>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(list, status, viewport, &mut fb);
        fb
    }

    /// Character coordinates (fractional) of a world point, relative to `origin`.
    fn to_term(&self, origin: (i32, i32), p: Vec2) -> Vec2 {
        Vec2::new(
            origin.0 as f32 + (p.x + GRID_HALF_WIDTH) / COLUMN_PITCH * self.cell_w as f32,
            origin.1 as f32 + (GRID_TOP - p.y) / ROW_PITCH * self.cell_h as f32,
        )
    }

    /// Character under a world point.
    fn point(&self, origin: (i32, i32), p: Vec2) -> (i32, i32) {
        let t = self.to_term(origin, p);
        (t.x.floor() as i32, t.y.floor() as i32)
    }

    /// Screen footprint of a sprite: its atlas half-extent, swapped on quarter turns.
    fn footprint(&self, origin: (i32, i32), cmd: &DrawCommand) -> Rect {
        let mut radius = sprite_info(cmd.sprite).radius;
        if quarter_turns(cmd.rotation) % 2 == 1 {
            radius = Vec2::new(radius.y, radius.x);
        }
        let min = self.to_term(origin, cmd.position + Vec2::new(-radius.x, radius.y));
        let max = self.to_term(origin, cmd.position + Vec2::new(radius.x, -radius.y));
        Rect {
            x0: min.x.round() as i32,
            y0: min.y.round() as i32,
            x1: max.x.round() as i32,
            y1: max.y.round() as i32,
        }
    }

    fn draw_command(&self, fb: &mut FrameBuffer, origin: (i32, i32), cmd: &DrawCommand) {
        match cmd.sprite {
            SpriteId::Tile { shape, .. } => {
                let rect = self.footprint(origin, cmd);
                draw_tile(fb, rect, shape.openings(quarter_turns(cmd.rotation)));
            }
            SpriteId::Rock => {
                let (x, y) = self.footprint(origin, cmd).center();
                fb.put(x, y, '◆', ROCK);
            }
            SpriteId::Player => {
                let (x, y) = self.point(origin, cmd.position);
                fb.put(x, y, '@', PLAYER);
            }
            SpriteId::Treasure => {
                let (x, y) = self.footprint(origin, cmd).center();
                fb.put(x, y, '$', TREASURE);
            }
            SpriteId::Banner(kind) => {
                let (x, y) = self.footprint(origin, cmd).center();
                fb.put_str_centered(x, y, kind.text(), banner_style(kind));
            }
        }
    }
}

/// Whole counter-clockwise quarter turns in a rotation.
fn quarter_turns(rotation: f32) -> u8 {
    let turns = (rotation / std::f32::consts::FRAC_PI_2).round();
    if turns.is_finite() {
        (turns as i32).rem_euclid(4) as u8
    } else {
        0
    }
}

fn banner_style(kind: MessageKind) -> CellStyle {
    match kind {
        MessageKind::Explore => VALUE,
        MessageKind::RockHere => VALUE.with_fg(ROCK.fg).bold(),
        MessageKind::MinedEmpty => VALUE.dim(),
        MessageKind::TreasureHere => VALUE.with_fg(TREASURE.fg).bold(),
    }
}

/// Box-drawing glyph joining the open sides at a tile's center.
fn junction_glyph(openings: Openings) -> char {
    let up = openings.contains(Direction::Up);
    let down = openings.contains(Direction::Down);
    let left = openings.contains(Direction::Left);
    let right = openings.contains(Direction::Right);
    match (up, down, left, right) {
        (false, false, false, false) => '·',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
        (false, false, true, false) => '╴',
        (false, false, false, true) => '╶',
        (true, true, false, false) => '│',
        (false, false, true, true) => '─',
        (true, false, true, false) => '┘',
        (true, false, false, true) => '└',
        (false, true, true, false) => '┐',
        (false, true, false, true) => '┌',
        (true, true, true, false) => '┤',
        (true, true, false, true) => '├',
        (true, false, true, true) => '┴',
        (false, true, true, true) => '┬',
        (true, true, true, true) => '┼',
    }
}

fn draw_tile(fb: &mut FrameBuffer, rect: Rect, openings: Openings) {
    fb.fill_rect(rect.x0, rect.y0, rect.x1 - rect.x0, rect.y1 - rect.y0, '░', WALL);

    let (cx, cy) = rect.center();
    if openings.contains(Direction::Left) {
        for x in rect.x0..cx {
            fb.put(x, cy, '─', CORRIDOR);
        }
    }
    if openings.contains(Direction::Right) {
        for x in cx + 1..rect.x1 {
            fb.put(x, cy, '─', CORRIDOR);
        }
    }
    if openings.contains(Direction::Up) {
        for y in rect.y0..cy {
            fb.put(cx, y, '│', CORRIDOR);
        }
    }
    if openings.contains(Direction::Down) {
        for y in cy + 1..rect.y1 {
            fb.put(cx, y, '│', CORRIDOR);
        }
    }
    fb.put(cx, cy, junction_glyph(openings), CORRIDOR);
}

fn draw_border(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, '┌', BORDER);
    fb.put(x + w - 1, y, '┐', BORDER);
    fb.put(x, y + h - 1, '└', BORDER);
    fb.put(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', BORDER);
        fb.put(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', BORDER);
        fb.put(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, status: &StatusView, viewport: Viewport, panel_x: u16, start_y: u16) {
    if panel_x >= viewport.width || viewport.width - panel_x < 12 {
        return;
    }
    let x = panel_x as i32;
    let mut y = start_y as i32;

    fb.put_str(x, y, "CELLS", LABEL);
    let end = fb.put_u32(x, y + 1, status.cells_visited as u32, VALUE);
    let end = fb.put_str(end, y + 1, "/", VALUE);
    fb.put_u32(end, y + 1, CELL_COUNT as u32, VALUE);
    y += 3;

    fb.put_str(x, y, "ROCKS", LABEL);
    let end = fb.put_u32(x, y + 1, status.rocks_mined as u32, VALUE);
    let end = fb.put_str(end, y + 1, "/", VALUE);
    fb.put_u32(end, y + 1, ROCK_COUNT as u32, VALUE);
    y += 3;

    fb.put_str(x, y, "TREASURE", LABEL);
    if status.treasure_found {
        fb.put_str(x, y + 1, "FOUND", TREASURE);
    } else {
        fb.put_str(x, y + 1, "-", VALUE);
    }
    y += 3;

    fb.put_str(x, y, "KEYS", LABEL);
    let dim = VALUE.dim();
    fb.put_str(x, y + 1, "arrows move", dim);
    fb.put_str(x, y + 2, "space  mine", dim);
    fb.put_str(x, y + 3, "q      quit", dim);
}
