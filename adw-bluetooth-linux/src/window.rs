use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

use std::cell::RefCell;
use std::rc::Rc;

use adw_bluetooth_core::config::AppConfig;
use adw_bluetooth_core::settings;

/// Build the main window and present it.
///
/// Persisted geometry takes precedence over the configured defaults; a
/// non-positive dimension from either source leaves the toolkit default
/// in place.
pub fn build_window(app: &adw::Application, config: &AppConfig) {
    let settings = Rc::new(RefCell::new(settings::load()));

    let mut builder = adw::ApplicationWindow::builder()
        .application(app)
        .title(config.title.as_str());

    {
        let s = settings.borrow();
        let width = if s.window_width > 0 {
            s.window_width
        } else {
            config.default_width
        };
        let height = if s.window_height > 0 {
            s.window_height
        } else {
            config.default_height
        };
        if width > 0 {
            builder = builder.default_width(width);
        }
        if height > 0 {
            builder = builder.default_height(height);
        }
    }

    let window = builder.build();

    if settings.borrow().maximized {
        window.maximize();
    }

    // Libadwaita layout pattern: the header bar docks into the toolbar
    // view's top-bar slot; the content area beneath it stays empty.
    let view = adw::ToolbarView::new();
    let header = adw::HeaderBar::new();
    view.add_top_bar(&header);
    window.set_content(Some(&view));

    // Save window geometry when the window is closed
    {
        let settings = settings.clone();
        window.connect_close_request(move |window| {
            {
                let mut s = settings.borrow_mut();
                s.maximized = window.is_maximized();
                if !s.maximized {
                    s.window_width = window.width();
                    s.window_height = window.height();
                }
            }
            settings::save(&settings.borrow());
            gtk4::glib::Propagation::Proceed
        });
    }

    window.present();
}
