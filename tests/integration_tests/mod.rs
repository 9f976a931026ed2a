// Mirrors src/: one file per module
#[path = "mod_cli.rs"]
mod cli_tests;
#[path = "mod_config.rs"]
mod config_tests;
#[path = "mod_errors.rs"]
mod errors_tests;
#[path = "mod_import.rs"]
mod import_tests;
#[path = "mod_logger.rs"]
mod logger_tests;
#[path = "mod_query.rs"]
mod query_tests;
#[path = "mod_snapshot.rs"]
mod snapshot_tests;
#[path = "mod_telemetry.rs"]
mod telemetry_tests;
