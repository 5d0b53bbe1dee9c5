use eframe::egui::{self, RichText};

use super::theme;
use crate::state::StatusMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionAction {
    Unsubscribe,
    Resubscribe,
    ShowAccount,
}

/// Subscription management, shown once the user has logged in
pub fn show(ui: &mut egui::Ui, message: Option<&StatusMessage>) -> Option<SubscriptionAction> {
    let mut action = None;

    ui.group(|ui| {
        ui.set_width(320.0);
        ui.heading("Manage subscription");
        ui.label(RichText::new("Daily weather forecast emails").color(theme::TEXT_MUTED));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("Unsubscribe").clicked() {
                action = Some(SubscriptionAction::Unsubscribe);
            }
            if ui.button("Resubscribe").clicked() {
                action = Some(SubscriptionAction::Resubscribe);
            }
            if ui.button("My account").clicked() {
                action = Some(SubscriptionAction::ShowAccount);
            }
        });

        if let Some(message) = message {
            ui.add_space(6.0);
            ui.colored_label(theme::message_color(message.color), &message.text);
        }
    });

    action
}
