use weighted_loss::{run_cross_check, LossConfig, LossError, LossWeights};

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("weighted-loss-{}-{name}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn save_and_load() {
    let path = temp_path("config.json");
    let mut config = LossConfig::default();
    config.l1 = LossWeights::new(0.9, 0.1).unwrap();
    config.check.seed = Some(99);
    config.check.height = 16;
    config.check.width = 16;

    config.save_json(&path).unwrap();
    let loaded = LossConfig::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(run_cross_check(&loaded).unwrap().passed());
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("does-not-exist.json");
    assert!(matches!(LossConfig::load_json(&path), Err(LossError::Io(_))));
}

#[test]
fn malformed_weights_are_rejected() {
    let path = temp_path("bad.json");
    std::fs::write(&path, r#"{"l1":{"real":"high","synthetic":0.4}}"#).unwrap();
    let result = LossConfig::load_json(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(LossError::Json(_))));
}
