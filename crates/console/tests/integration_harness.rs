//! Integration tests for persistence and the two-loop editor handle.

use std::path::PathBuf;

use scene_console_lib::app::{run_command_listener, Editor};
use scene_console_lib::harness::EditorHarness;
use scene_console_lib::settings::AppSettings;
use scene_console_lib::state::EditorState;
use shared::ShapeKind;

fn temp_save_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scene_console_{}_{}", std::process::id(), name))
}

#[test]
fn accepted_commands_persist_to_disk() {
    let path = temp_save_file("persist.txt");
    let mut h = EditorHarness::with_save_path(path.clone());

    h.run_all(&["add cube 1 2 3", "background blue"]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("background_color: blue"));
    assert!(text.contains("0: cube 1 2 3 1 1 1 0 redCube"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn saved_scene_loads_back_identically() {
    let path = temp_save_file("roundtrip.txt");
    let mut writer = EditorHarness::with_save_path(path.clone());
    writer
        .run_all(&[
            "add cube 1 2 3",
            "rotate 0 45",
            "add sphere -0.5 0 2",
            "color 1 blueSphere",
            "background black",
        ])
        .unwrap();

    let mut reader = EditorHarness::with_save_path(path.clone());
    reader.run("load").unwrap();

    assert_eq!(reader.state.scene.scene, writer.state.scene.scene);
    assert_eq!(reader.object(1).unwrap().shape, ShapeKind::Sphere);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_save_file_is_a_first_run() {
    let path = temp_save_file("missing.txt");
    let mut state = EditorState::new(AppSettings::default(), None);
    let loaded = state.scene.load_from(&path).unwrap();
    assert!(!loaded);
    assert_eq!(state.scene.len(), 0);
    assert_eq!(state.scene.scene.background, "gray");
}

#[test]
fn corrupt_save_file_reports_and_keeps_memory_state() {
    let path = temp_save_file("corrupt.txt");
    std::fs::write(&path, "0: cube one 2 3 1 1 1 0 redCube\n").unwrap();

    let mut h = EditorHarness::with_save_path(path.clone());
    h.run("add cone 0 0 0").unwrap();
    // run() rewrites the save; corrupt it again before loading.
    std::fs::write(&path, "garbage\n").unwrap();

    let err = h.run("load").unwrap_err();
    assert!(err.to_string().contains("corrupt"));
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.object(0).unwrap().shape, ShapeKind::Cone);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn editor_startup_loads_and_reseeds_history() {
    let path = temp_save_file("startup.txt");
    {
        let mut h = EditorHarness::with_save_path(path.clone());
        h.run_all(&["add torus 0 1 0", "uscale 0 2"]).unwrap();
    }

    let mut settings = AppSettings::default();
    settings.save_file = path.clone();
    let editor = Editor::new(settings);

    let frame = editor.frame();
    assert_eq!(frame.objects.len(), 1);
    assert_eq!(frame.objects[0].scale, [2.0, 2.0, 2.0]);

    // History was seeded with the loaded state: undo has no further floor.
    let err = editor.submit("undo").unwrap_err();
    assert!(err.to_string().contains("no more states"));
    assert_eq!(editor.frame().objects.len(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn listener_thread_and_frame_loop_share_state() {
    let editor = Editor::from_state(EditorState::new(AppSettings::default(), None));

    let listener = {
        let editor = editor.clone();
        std::thread::spawn(move || {
            let input = std::io::Cursor::new(b"add cube 0 0 0\nadd cone 1 0 0\nquit\n".to_vec());
            run_command_listener(&editor, input, &mut Vec::new()).unwrap();
        })
    };

    // Frame loop: poll until the listener requests the stop.
    let mut last = editor.frame();
    while !editor.should_stop() {
        let frame = editor.frame();
        // A frame reflects whole mutations only: never a half-built object.
        for obj in &frame.objects {
            assert_eq!(obj.scale, [1.0, 1.0, 1.0]);
        }
        last = frame;
        std::thread::yield_now();
    }
    listener.join().unwrap();

    let final_frame = editor.frame();
    assert_eq!(final_frame.objects.len(), 2);
    assert!(last.version <= final_frame.version);
}
