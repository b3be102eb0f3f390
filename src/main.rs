mod assets;
#[cfg(feature = "keyboard-nav")]
mod keybindings;
mod services;
mod state;
mod workspace;

use gpui::*;
use gpui_component::Root;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::assets::Assets;
use crate::workspace::Workspace;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bgui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Application::new().with_assets(Assets);

    app.run(move |cx| {
        gpui_component::init(cx);
        state::init(cx);
        #[cfg(feature = "keyboard-nav")]
        keybindings::init(cx);

        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(1200.), px(800.)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("bgui".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let workspace = Workspace::view(window, cx);
            cx.new(|cx| Root::new(workspace, window, cx))
        })
        .expect("failed to open window");
    });
}
