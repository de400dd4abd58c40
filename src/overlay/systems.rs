use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, RichText, Stroke};
use bevy_egui::{EguiContext, PrimaryEguiContext};

use super::{OverlayConfig, coord_text, row_intents};
use crate::menu::{EntryId, HoverIntent, HoverState, MenuCatalog, MenuEntry};

/// Draws the menu column and emits [`HoverIntent`]s as the pointer moves
/// between rows.
pub fn draw_menu(
    mut egui_ctx: Query<&mut EguiContext, With<PrimaryEguiContext>>,
    catalog: Res<MenuCatalog>,
    hover: Res<HoverState>,
    cfg: Res<OverlayConfig>,
    mut intents: MessageWriter<HoverIntent>,
    mut hovered_row: Local<Option<EntryId>>,
) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let ctx = ctx.get_mut();
    let accent = egui_color(cfg.accent);
    let width = ctx.available_rect().width() * cfg.menu_width_fraction;

    let mut now_hovered = None;
    egui::SidePanel::right("menu_rows")
        .resizable(false)
        .show_separator_line(false)
        .exact_width(width)
        .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(32, 0)))
        .show(ctx, |ui| {
            let rows = catalog.iter().count() as f32;
            let column_height = rows * (cfg.row_height + 32.0 + cfg.row_gap);
            ui.add_space(((ui.available_height() - column_height) / 2.0).max(0.0));

            for entry in catalog.iter() {
                let active = hover.current() == Some(entry.id);
                if menu_row(ui, entry, active, accent, &cfg).contains_pointer() {
                    now_hovered = Some(entry.id);
                }
                ui.add_space(cfg.row_gap);
            }
        });

    for intent in row_intents(*hovered_row, now_hovered) {
        intents.write(intent);
    }
    *hovered_row = now_hovered;
}

fn menu_row(
    ui: &mut egui::Ui,
    entry: &MenuEntry,
    active: bool,
    accent: Color32,
    cfg: &OverlayConfig,
) -> egui::Response {
    let (fill, stroke, text) = if active {
        (accent.gamma_multiply(0.1), accent, Color32::WHITE)
    } else {
        (
            Color32::from_black_alpha(100),
            accent.gamma_multiply(0.3),
            accent,
        )
    };
    let row_width = ui.available_width() - cfg.active_nudge;

    ui.horizontal(|ui| {
        ui.add_space(if active { 0.0 } else { cfg.active_nudge });
        egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, stroke))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(row_width - 32.0);
                ui.set_min_height(cfg.row_height);
                ui.label(
                    RichText::new(entry.label.to_uppercase())
                        .monospace()
                        .size(18.0)
                        .color(text),
                );
            })
            .response
    })
    .inner
}

/// Shows the label, description and coordinates of the hovered entry.
pub fn draw_info_panel(
    mut egui_ctx: Query<&mut EguiContext, With<PrimaryEguiContext>>,
    catalog: Res<MenuCatalog>,
    hover: Res<HoverState>,
    cfg: Res<OverlayConfig>,
) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let ctx = ctx.get_mut();

    let shown = hover.active_entry(&catalog);
    let fade = ctx.animate_bool_with_time(
        egui::Id::new("info_panel_fade"),
        shown.is_some(),
        cfg.fade_secs,
    );
    let Some(entry) = shown else {
        return;
    };

    let accent = egui_color(cfg.accent);
    let pulse = ((ctx.input(|i| i.time) * 3.0).sin() * 0.25 + 0.75) as f32;

    egui::Area::new(egui::Id::new("info_panel"))
        .anchor(
            egui::Align2::LEFT_CENTER,
            egui::vec2(cfg.info_margin, (1.0 - fade) * cfg.fade_rise),
        )
        .interactable(false)
        .show(ctx, |ui| {
            ui.multiply_opacity(fade);
            egui::Frame::new()
                .fill(Color32::from_black_alpha(204))
                .stroke(Stroke::new(1.0, accent.gamma_multiply(0.3)))
                .inner_margin(egui::Margin::same(32))
                .show(ui, |ui| {
                    ui.set_width(cfg.info_width);
                    ui.label(
                        RichText::new("● LIVE DATA")
                            .monospace()
                            .size(11.0)
                            .color(accent.gamma_multiply(pulse)),
                    );
                    ui.separator();
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(entry.label.to_uppercase())
                            .monospace()
                            .strong()
                            .size(30.0)
                            .color(Color32::WHITE),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(entry.description)
                            .monospace()
                            .size(15.0)
                            .color(accent.gamma_multiply(0.8)),
                    );
                    ui.add_space(24.0);
                    ui.horizontal(|ui| {
                        let footer = |text: String| {
                            RichText::new(text).monospace().size(10.0).color(Color32::GRAY)
                        };
                        ui.label(footer(coord_text(entry.position)));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(footer("STATUS: ONLINE".to_owned()));
                        });
                    });
                });
        });
}

fn egui_color(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
