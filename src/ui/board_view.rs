//! Board rendering for the Gomoku GUI

use std::collections::BTreeSet;

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_cells: Option<&'a BTreeSet<Pos>>,
    /// Clicks are ignored and no hover preview is drawn
    pub locked: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        let pulse = Self::pulse(ui.input(|i| i.time));
        for pos in Pos::all() {
            let stone = scene.board.get(pos);
            let winning = scene.winning_cells.is_some_and(|cells| cells.contains(&pos));
            if winning {
                self.draw_win_glow(&painter, pos, pulse);
            }
            self.draw_stone(&painter, pos, stone, if winning { pulse } else { 1.0 });
        }

        if let Some(pos) = scene.last_move {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(pos) = scene.suggested_move {
            self.draw_suggestion(&painter, pos, scene.current_turn);
        }

        if scene.locked {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = scene.board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, scene.current_turn, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Scale factor cycling between 1.0 and `WIN_PULSE_SCALE`
    fn pulse(time: f64) -> f32 {
        let phase = (time * 3.0).sin() as f32 * 0.5 + 0.5;
        1.0 + (WIN_PULSE_SCALE - 1.0) * phase
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters A-O, ranks 15-1 top to bottom
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let letter = ((b'A' + i as u8) as char).to_string();
            let x = self.board_rect.min.x + BOARD_MARGIN + i as f32 * self.cell_size;
            painter.text(
                Pos2::new(x, self.board_rect.min.y + 12.0),
                egui::Align2::CENTER_CENTER,
                &letter,
                font.clone(),
                GRID_LINE,
            );

            let rank = (BOARD_SIZE - i).to_string();
            let y = self.board_rect.min.y + BOARD_MARGIN + i as f32 * self.cell_size;
            painter.text(
                Pos2::new(self.board_rect.min.x + 12.0, y),
                egui::Align2::CENTER_CENTER,
                &rank,
                font.clone(),
                GRID_LINE,
            );
        }
    }

    /// Draw a single stone, scaled for the win animation
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone, scale: f32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO * scale;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_win_glow(&self, painter: &Painter, pos: Pos, scale: f32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO * scale;
        painter.circle_filled(center, radius * 1.5, win_glow());
        painter.circle_stroke(center, radius + 3.0, Stroke::new(3.0, WIN_HIGHLIGHT));
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, mark) = match turn {
            Stone::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Stone::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
            Stone::Empty => return,
        };

        painter.circle_filled(center, radius, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            mark,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if !is_valid {
            hover_invalid()
        } else {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::checked(y.floor() as i32, x.floor() as i32)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
