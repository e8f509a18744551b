use std::time::Duration;

use scene_console_lib::app::{run_command_listener, Editor};
use scene_console_lib::settings::AppSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scene_console_lib=info".into()),
        )
        .init();

    let settings = AppSettings::load();
    let editor = Editor::new(settings);

    let listener = {
        let editor = editor.clone();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            if let Err(e) = run_command_listener(&editor, stdin.lock(), std::io::stdout()) {
                tracing::error!("command listener failed: {e}");
            }
            editor.request_stop();
        })
    };

    // Frame loop: the seam where a renderer consumes frames. Headless, it
    // just paces the poll and logs scene changes.
    let mut last_version = u64::MAX;
    while !editor.should_stop() {
        let frame = editor.frame();
        if frame.version != last_version {
            last_version = frame.version;
            tracing::debug!(objects = frame.objects.len(), "scene changed");
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    editor.final_save();
    // The listener may still be blocked on a read; it exits on the next
    // line or EOF. Join so the shared state outlives it.
    let _ = listener.join();
}
