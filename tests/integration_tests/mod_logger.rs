use std::fs;
use tempfile::tempdir;

#[test]
fn configure_logging_creates_app_and_metrics_files() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("proc_logs");
    formfilter::logger::configure_logging(Some(base.as_path()), Some("debug"), Some(3)).unwrap();
    log::info!("hello app");
    log::info!(target: formfilter::query::telemetry::METRICS_TARGET, "metric event");
    assert!(base.join("app.log").exists());
    assert!(base.join("metrics.log").exists());
    assert!(fs::metadata(&base).unwrap().is_dir());
}

#[test]
fn init_path_loads_yaml_config() {
    let dir = tempdir().unwrap();
    let log_file = dir.path().join("yaml.log");
    let yaml = format!(
        concat!(
            "appenders:\n",
            "  file:\n",
            "    kind: file\n",
            "    path: \"{}\"\n",
            "    encoder:\n",
            "      pattern: \"{{m}}{{n}}\"\n",
            "root:\n",
            "  level: info\n",
            "  appenders:\n",
            "    - file\n",
        ),
        log_file.display().to_string().replace('\\', "/")
    );
    let cfg = dir.path().join("log4rs.yaml");
    fs::write(&cfg, yaml).unwrap();
    formfilter::logger::init_path(&cfg).unwrap();
    assert!(log_file.exists());
}

#[test]
fn init_path_rejects_missing_file() {
    let dir = tempdir().unwrap();
    assert!(formfilter::logger::init_path(&dir.path().join("absent.yaml")).is_err());
}
