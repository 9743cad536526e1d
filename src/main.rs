//! SwipeDeck - decide on a deck of cards by swiping them left or right
//! Built with iced; the card tilts as it is dragged and flings off screen

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Run as a daemon so the window is opened with our own settings;
    // closing it exits through `Message::WindowClosed`
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
