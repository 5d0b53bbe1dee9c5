use eframe::egui;
use std::future::Future;

use crate::controller::FormController;

use super::account::{AccountAction, AccountView};
use super::subscription::{self, SubscriptionAction};
use super::theme;

pub struct WeatherMailApp {
    controller: FormController,
    runtime: tokio::runtime::Runtime,
    account_view: AccountView,
}

impl WeatherMailApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        controller: FormController,
    ) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        cc.egui_ctx.set_style(style);

        runtime.block_on(controller.restore_session());

        Self {
            controller,
            runtime,
            account_view: AccountView::new(),
        }
    }

    /// Run a handler in the background and repaint once it has written its
    /// result. Submissions are not de-duplicated.
    fn spawn<F>(&self, ctx: &egui::Context, handler: F)
    where
        F: Future + Send + 'static,
    {
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            handler.await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for WeatherMailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let page = self.runtime.block_on(self.controller.page().snapshot());

        let mut account_action = None;
        let mut subscription_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading("weatherMail");
                    ui.add_space(20.0);

                    account_action = self.account_view.show(ui);

                    if let Some(message) = &page.message {
                        ui.add_space(10.0);
                        ui.colored_label(theme::message_color(message.color), &message.text);
                    }

                    if page.subscription_visible {
                        ui.add_space(12.0);
                        subscription_action =
                            subscription::show(ui, page.subscription_message.as_ref());
                    }
                });
            });
        });

        let controller = self.controller.clone();
        match account_action {
            Some(AccountAction::Register(form)) => {
                self.spawn(ctx, async move { controller.handle_register(form).await });
            }
            Some(AccountAction::Login(form)) => {
                self.spawn(ctx, async move { controller.handle_login(form).await });
            }
            None => {}
        }

        let controller = self.controller.clone();
        match subscription_action {
            Some(SubscriptionAction::Unsubscribe) => {
                self.spawn(ctx, async move { controller.handle_unsubscribe().await });
            }
            Some(SubscriptionAction::Resubscribe) => {
                self.spawn(ctx, async move { controller.handle_resubscribe().await });
            }
            Some(SubscriptionAction::ShowAccount) => {
                self.spawn(ctx, async move { controller.handle_current_user().await });
            }
            None => {}
        }
    }
}
