//! Dispatching built-in commands through the registry.

use storedesk_cli::command::CommandRegistry;
use storedesk_cli::commands::register_builtin_commands;
use storedesk_core::{Settings, StoreDeskResult};

fn run(args: &[&str], settings: &Settings) -> StoreDeskResult<String> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().try_get_matches_from(args).unwrap();
    let mut out = Vec::new();
    registry.execute(&matches, settings, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_render_uses_configured_page_size() {
    let settings = Settings {
        list_per_page: 5,
        ..Settings::default()
    };
    let html = run(&["storedesk", "render", "customers", "--page", "3"], &settings).unwrap();
    assert!(html.contains("11-12 of 12"));
}

#[test]
fn test_render_store_form_label() {
    let settings = Settings {
        confirm_button_label: "Save".into(),
        ..Settings::default()
    };
    let html = run(&["storedesk", "render", "store", "--id", "2"], &settings).unwrap();
    assert!(html.contains(">Save</button>"));
    assert!(html.contains(r#"value="Baldwin Bikes""#));
}

#[test]
fn test_submit_round_trip() {
    let out = run(
        &["storedesk", "submit", "--store", "2", "--set", "zipCode=11510"],
        &Settings::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["zipCode"], "11510");
    assert_eq!(json["name"], "Baldwin Bikes");
}

#[test]
fn test_submit_validation_exit_code() {
    let err = run(&["storedesk", "submit", "--set", "name= "], &Settings::default()).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_settings_flag_is_accepted_by_every_command() {
    let out = run(&["storedesk", "pages", "--settings", "ignored.toml"], &Settings::default()).unwrap();
    assert!(out.starts_with("customers"));
}
