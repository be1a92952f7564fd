mod window;

use gtk4::gio;
use gtk4::prelude::*;
use libadwaita as adw;

use adw_bluetooth_core::config::AppConfig;

fn main() -> gtk4::glib::ExitCode {
    env_logger::init();

    let config = AppConfig::default();
    log::info!("Starting {} ({})", config.title, config.app_id);

    let app = adw::Application::builder()
        .application_id(config.app_id.as_str())
        .build();

    // Ctrl+Q quits the application, Ctrl+W closes the focused window.
    let quit_action = gio::SimpleAction::new("quit", None);
    {
        let app = app.clone();
        quit_action.connect_activate(move |_, _| app.quit());
    }
    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
    app.set_accels_for_action("window.close", &["<Control>w"]);

    app.connect_activate(move |app| {
        // Re-activation presents the window that already exists instead of
        // building a second one.
        if let Some(existing) = app.active_window() {
            existing.present();
            return;
        }
        window::build_window(app, &config);
    });

    app.run()
}
