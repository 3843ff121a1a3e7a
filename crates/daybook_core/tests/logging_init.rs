use daybook_core::{default_log_level, init_logging, logging_status};

#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dir_str = dir.path().to_str().expect("utf-8 path").to_string();
    let other = tempfile::tempdir().expect("temp dir");
    let other_str = other.path().to_str().expect("utf-8 path").to_string();

    init_logging("info", &dir_str).expect("first init succeeds");
    init_logging("info", &dir_str).expect("same config is idempotent");

    let level_error = init_logging("debug", &dir_str).expect_err("level conflict fails");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &other_str).expect_err("directory conflict fails");
    assert!(dir_error.contains("refusing to switch"));

    let (level, active_dir) = logging_status().expect("logging active");
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());
}

#[test]
fn default_level_is_a_supported_value() {
    assert!(matches!(default_log_level(), "debug" | "info"));
}
