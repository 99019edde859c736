//! Office AI デスクトップビューア

mod app;
mod io;
mod model;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Office AI",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
