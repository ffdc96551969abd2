//! Widgets that paint a `RenderView`: status region and user cards.

use client_core::{StatusView, UserCard};

const CARD_WIDTH: f32 = 300.0;
const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const NAME_COLOR: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
const EMAIL_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const CAPTION_COLOR: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const ADDRESS_COLOR: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);

pub fn show_status(ui: &mut egui::Ui, status: &StatusView) {
    match status {
        StatusView::Hidden => {}
        StatusView::Loading { message } => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().size(40.0));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(*message)
                        .size(18.0)
                        .color(CAPTION_COLOR),
                );
            });
        }
        StatusView::Error { heading, message } => {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(254, 226, 226))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(248, 113, 113)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        let text_color = egui::Color32::from_rgb(185, 28, 28);
                        ui.label(egui::RichText::new(*heading).strong().color(text_color));
                        ui.label(egui::RichText::new(*message).color(text_color));
                    });
                });
        }
    }
}

pub fn show_card(ui: &mut egui::Ui, card: &UserCard) {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(
                egui::RichText::new(&card.name)
                    .size(18.0)
                    .strong()
                    .color(NAME_COLOR),
            );
            ui.add_space(4.0);
            ui.add(
                egui::Label::new(egui::RichText::new(&card.email).color(EMAIL_COLOR)).wrap(),
            );
            ui.add_space(8.0);
            ui.separator();
            ui.label(
                egui::RichText::new("Address")
                    .small()
                    .strong()
                    .color(CAPTION_COLOR),
            );
            ui.add(
                egui::Label::new(egui::RichText::new(&card.address).color(ADDRESS_COLOR))
                    .wrap(),
            );
        });
}

/// Lays cards out left-to-right, wrapping to as many columns as the panel allows.
pub fn show_card_grid(ui: &mut egui::Ui, cards: &[UserCard]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for card in cards {
            ui.vertical(|ui| show_card(ui, card));
        }
    });
}
