#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn convert_level_to_filter___maps_level(level: LogLevel, expected: LevelFilter) {
    assert_eq!(convert_level_to_filter(level), expected);
}

#[test]
fn ReloadHandle___new___is_not_initialized() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_initialized());
    assert_eq!(handle.current_filter(), None);
}

#[test]
fn ReloadHandle___reload_without_handle___returns_not_initialized() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert!(matches!(result, Err(ReloadError::NotInitialized)));
}

#[test]
fn ReloadHandle___reload_with_handle___changes_filter() {
    let (_layer, inner) = reload::Layer::<LevelFilter, Registry>::new(LevelFilter::INFO);
    let handle = ReloadHandle::new();
    handle.set_handle(inner);

    handle.reload_level(LogLevel::Warn).unwrap();

    assert!(handle.is_initialized());
    assert_eq!(handle.current_filter(), Some(LevelFilter::WARN));
}

#[test]
fn ReloadHandle___layer_dropped___returns_reload_error() {
    let (layer, inner) = reload::Layer::<LevelFilter, Registry>::new(LevelFilter::INFO);
    drop(layer);
    let handle = ReloadHandle::new();
    handle.set_handle(inner);

    let result = handle.reload_level(LogLevel::Trace);

    assert!(matches!(result, Err(ReloadError::Reload(_))));
}

#[test]
fn ReloadHandle___global___returns_same_instance() {
    assert!(std::ptr::eq(ReloadHandle::global(), ReloadHandle::global()));
}
