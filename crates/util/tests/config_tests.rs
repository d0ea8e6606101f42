use adminshell_types::{MenuConfigError, MenuEntryKind};
use adminshell_util::{ConfigError, ShellConfig};

fn load_fixture() -> ShellConfig {
    let data = include_str!("data/config_fixture.json");
    ShellConfig::from_json_str(data).expect("load config from fixture")
}

#[test]
fn reads_branding_and_identity() {
    let config = load_fixture();
    assert_eq!(config.project_name, "Acme Ops");
    assert_eq!(config.title, "Acme Operations Console");
    assert_eq!(config.user.email, "grace@acme.test");
    assert_eq!(config.user.initial(), "G");
    assert_eq!(config.theme.as_deref(), Some("nord"));
}

#[test]
fn builds_typed_menu_entries() {
    let config = load_fixture();
    let names: Vec<_> = config.menu.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Dashboard", "Users", "Settings"]);

    assert_eq!(config.menu[0].path(), Some("/"));
    match &config.menu[1].kind {
        MenuEntryKind::Container { submenu } => {
            let paths: Vec<_> = submenu.iter().map(|item| item.path.as_str()).collect();
            assert_eq!(paths, ["/users", "/users/invitations"]);
        }
        other => panic!("expected container, got {:?}", other),
    }
}

#[test]
fn rejects_container_with_path() {
    let data = r#"{ "menu": [ { "menuName": "Users", "hasSubmenu": true, "path": "/users", "submenuArray": [] } ] }"#;
    match ShellConfig::from_json_str(data) {
        Err(ConfigError::Menu(MenuConfigError::ConflictingTarget { index, name })) => {
            assert_eq!(index, 0);
            assert_eq!(name, "Users");
        }
        other => panic!("expected conflicting target error, got {:?}", other),
    }
}

#[test]
fn rejects_child_without_path() {
    let data = r#"{ "menu": [
        { "menuName": "Home", "hasSubmenu": false, "path": "/" },
        { "menuName": "Users", "hasSubmenu": true, "submenuArray": [ { "menuName": "All" }, { "menuName": "Add" } ] }
    ] }"#;
    let error = ShellConfig::from_json_str(data).expect_err("child without path");
    assert!(
        matches!(error, ConfigError::Menu(MenuConfigError::MissingChildPath { index: 1, child: 0, .. })),
        "unexpected error: {error}"
    );
}
