//! Integration tests for logger behavior.

use uni_admissions::logger::{disable_debug, enable_debug, set_level, set_level_from_str, Level};
use uni_admissions::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn debug_respects_runtime_flag() {
    set_level(Level::Debug);
    disable_debug();
    debug!("should be silent");
    enable_debug();
    debug!("should emit");
}
