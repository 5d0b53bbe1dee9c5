mod account;
mod app;
mod subscription;
pub mod theme;

pub use app::WeatherMailApp;
