//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView};
use super::game_state::{GameMode, GameOutcome, GameState, SessionConfig};
use super::theme::*;
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: SessionConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Black)").clicked() {
                        self.state.set_mode(GameMode::PvE { human_color: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - White)").clicked() {
                        self.state.set_mode(GameMode::PvE { human_color: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.state.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(mode_label(self.state.mode));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.game_over.is_some() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(11.0).color(STATUS_WAITING));
                    });
                }
            });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Stone::Black;
            let (accent, glyph_color) = if is_black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, accent);
                ui.painter().circle_stroke(rect.center(), 18.0, egui::Stroke::new(1.0, glyph_color));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    let name = self.state.current_turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI thinking...", STATUS_WAITING)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Restart (N)").clicked() {
                    self.state.reset();
                }
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("Hint (H)").clicked() {
                    self.state.request_suggestion();
                }
            });
            ui.add_space(6.0);
            let toggle_text = match self.state.mode {
                GameMode::PvP => "Switch to vs AI (M)",
                GameMode::PvE { .. } => "Switch to Two Players (M)",
            };
            if ui.button(toggle_text).clicked() {
                self.state.set_mode(self.state.mode.toggled());
            }
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(STATUS_READY),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Score: {}  |  {} candidates  |  {}ms",
                            result.score, result.nodes, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }

            if let Some(remaining) = self.state.ai_remaining(Instant::now()) {
                ui.label(
                    RichText::new(format!("Next move in {:.2}s", remaining.as_secs_f32()))
                        .size(10.0)
                        .color(STATUS_WAITING),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match &self.state.game_over {
            Some(GameOutcome::Win(result)) => format!("{} WINS!", result.winner.name().to_uppercase()),
            Some(GameOutcome::Draw) => "DRAW".to_string(),
            None => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let scene = BoardScene {
                board: &self.state.board,
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_cells: self.state.winning_cells(),
                locked: self.state.game_over.is_some() || !self.state.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::M) {
                self.state.set_mode(self.state.mode.toggled());
            }
        });
    }
}

/// Card frame shared by the side panel
fn card_frame() -> Frame {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
}

fn mode_label(mode: GameMode) -> String {
    match mode {
        GameMode::PvE { human_color } => format!("vs AI - You: {}", human_color.name()),
        GameMode::PvP => "Two Players".to_string(),
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.poll_ai(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the machine waits, and animate the winning line
        if let Some(remaining) = self.state.ai_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        } else if self.state.game_over.is_some() {
            ctx.request_repaint();
        }
    }
}
