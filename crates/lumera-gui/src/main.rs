mod app;
mod format;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("lumera=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Lumera::new, app::Lumera::update, app::Lumera::view)
        .title(app::Lumera::title)
        .subscription(app::Lumera::subscription)
        .theme(app::Lumera::theme)
        .window(win)
        .run()
}
