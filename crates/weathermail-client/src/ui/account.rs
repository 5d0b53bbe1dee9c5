use eframe::egui;

use crate::controller::{LoginForm, RegisterForm};

pub enum AccountAction {
    Register(RegisterForm),
    Login(LoginForm),
}

/// Registration and login forms. Field values are kept between frames and
/// submitted as typed, with no client-side validation.
#[derive(Default)]
pub struct AccountView {
    register: RegisterForm,
    login: LoginForm,
}

impl AccountView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<AccountAction> {
        let mut action = None;

        ui.group(|ui| {
            ui.set_width(320.0);
            ui.heading("Register");
            ui.add_space(6.0);

            egui::Grid::new("register-form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("First name:");
                    ui.text_edit_singleline(&mut self.register.first_name);
                    ui.end_row();

                    ui.label("Last name:");
                    ui.text_edit_singleline(&mut self.register.last_name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut self.register.email);
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(egui::TextEdit::singleline(&mut self.register.password).password(true));
                    ui.end_row();

                    ui.label("City:");
                    ui.text_edit_singleline(&mut self.register.city);
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Register").clicked() {
                action = Some(AccountAction::Register(self.register.clone()));
            }
        });

        ui.add_space(12.0);

        ui.group(|ui| {
            ui.set_width(320.0);
            ui.heading("Login");
            ui.add_space(6.0);

            egui::Grid::new("login-form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email:");
                    ui.text_edit_singleline(&mut self.login.email);
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(egui::TextEdit::singleline(&mut self.login.password).password(true));
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Login").clicked() {
                action = Some(AccountAction::Login(self.login.clone()));
            }
        });

        action
    }
}
