use formfilter::FilterError;
use formfilter::config::{self, FileConfig, OutputMode};
use formfilter::query::Logic;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn explicit_file_is_read_and_overrides_win() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ff.toml");
    fs::write(
        &path,
        concat!(
            "records_dir = \"forms\"\n",
            "default_logic = \"or\"\n",
            "output = \"json\"\n",
            "log_level = \"debug\"\n",
        ),
    )
    .unwrap();
    let overrides = FileConfig { output: Some(OutputMode::Ids), ..FileConfig::default() };
    let cfg = config::load(Some(path.as_path()), overrides).unwrap();
    assert_eq!(cfg.records_dir, PathBuf::from("forms"));
    assert_eq!(cfg.default_logic, Logic::Or);
    assert_eq!(cfg.output, OutputMode::Ids);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempdir().unwrap();
    let err = config::load(Some(dir.path().join("absent.toml").as_path()), FileConfig::default());
    assert!(matches!(err, Err(FilterError::Config(_))));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "default_logic = \"xor\"\n").unwrap();
    let err = config::load(Some(path.as_path()), FileConfig::default());
    assert!(matches!(err, Err(FilterError::Toml(_))));
}

#[test]
fn explicit_path_is_searched_first() {
    let p = PathBuf::from("/tmp/explicit.toml");
    let paths = config::find_config_paths(Some(p.as_path()));
    assert_eq!(paths.first(), Some(&p));
    assert!(paths.iter().any(|q| q.ends_with(config::CONFIG_FILE_NAME)));
}
