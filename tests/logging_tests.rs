use cube_four::{level_from, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_from_parses_known_levels() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn test_level_from_falls_back_to_info() {
    assert_eq!(level_from(Some("bogus")), LevelFilter::Info);
    assert_eq!(level_from(None), LevelFilter::Info);
}

#[test]
fn test_log_env_name() {
    assert_eq!(LOG_ENV, "CUBE_FOUR_LOG");
}
