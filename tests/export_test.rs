//! End-to-end export of `.side` projects

use side_export::{ExportConfig, Exporter, Project, CONFIG_FILE};
use std::fs;

const SHOP_SIDE: &str = r#"{
  "id": "8f1c",
  "version": "2.0",
  "name": "shop",
  "url": "https://shop.example",
  "tests": [
    {
      "id": "t-login",
      "name": "log in",
      "commands": [
        {"id": "1", "comment": "", "command": "open", "target": "/login", "targets": [], "value": ""},
        {"id": "2", "comment": "", "command": "type", "target": "id=user", "targets": [["id=user", "id"], ["name=user", "name"]], "value": "${username}"},
        {"id": "3", "comment": "", "command": "click", "target": "css=button[type=submit]", "targets": [], "value": ""}
      ]
    },
    {
      "id": "t-help",
      "name": "open help",
      "commands": [
        {"id": "4", "comment": "help opens in a popup", "command": "click", "target": "linkText=Help", "targets": [], "value": "",
         "opensWindow": true, "windowHandleName": "win_help", "windowTimeout": 3000},
        {"id": "5", "comment": "", "command": "selectWindow", "target": "handle=${win_help}", "targets": [], "value": ""},
        {"id": "6", "comment": "", "command": "//close", "target": "", "targets": [], "value": ""}
      ]
    }
  ],
  "suites": [
    {"id": "s1", "name": "smoke tests", "persistSession": false, "parallel": false, "timeout": 300, "tests": ["t-login"]},
    {"id": "s2", "name": "popups", "persistSession": false, "parallel": false, "timeout": 300, "tests": ["t-help", "t-login"]}
  ],
  "urls": ["https://shop.example/"],
  "plugins": []
}"#;

fn write_project(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("shop.side");
    fs::write(&path, SHOP_SIDE).unwrap();
    path
}

#[test]
fn test_export_suite_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::load(&write_project(dir.path())).unwrap();

    let out = Exporter::default()
        .render_suite(&project, "smoke tests", "shop.side")
        .unwrap();

    assert!(out.starts_with("<?php\n"));
    assert!(out.contains("// SOURCE: shop.side"));
    assert!(out.contains(&format!("// PROJECT HASH: {}", project.hash())));
    assert!(out.contains("use Faker\\Factory;\n"));
    assert!(out.contains("class SmokeTestsCest\n{\n"));
    assert!(out.contains(
        "    public function logIn(AcceptanceTester $I)\n    {\n        $I->amOnPage(\"/login\");\n        $I->fillField([\"id\" => \"user\"], \"$username\");\n        $I->click([\"css\" => \"button[type=submit]\"]);\n    }\n"
    ));
    assert!(!out.contains("openHelp"));
    assert!(!out.contains("waitForWindow"));
    assert!(out.trim_end().ends_with('}'));
}

#[test]
fn test_export_new_window_adds_helper() {
    let project = Project::from_json(SHOP_SIDE).unwrap();
    let out = Exporter::default()
        .render_suite(&project, "popups", "shop.side")
        .unwrap();

    assert!(out.contains("class PopupsCest"));
    // suite order is kept
    let help = out.find("function openHelp").unwrap();
    let login = out.find("function logIn").unwrap();
    assert!(help < login);

    assert!(out.contains("        // help opens in a popup\n        $windowHandles = $I->executeInSelenium("));
    assert!(out.contains("        $win_help = $this->waitForWindow($I, $windowHandles, 3000);"));
    assert!(out.contains("        $I->switchToWindow($win_help);"));
    assert!(out.contains("        // disabled: close"));
    assert!(out.contains("    public function waitForWindow(AcceptanceTester $I, array $windowHandles, int $timeout)"));
}

#[test]
fn test_export_project_with_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "indent: \"\\t\"\nclass_suffix: Test\nprovenance: false\n",
    )
    .unwrap();
    let config = ExportConfig::load_from_dir(dir.path()).unwrap().unwrap();
    let project = Project::load(&write_project(dir.path())).unwrap();

    let out = Exporter::with_config(config)
        .render_project(&project, "shop.side")
        .unwrap();

    assert!(out.contains("class ShopTest\n{\n"));
    assert!(out.contains("\tpublic function logIn(AcceptanceTester $I)\n\t{\n\t\t$I->amOnPage(\"/login\");"));
    assert!(!out.contains("PROJECT HASH"));
}

#[test]
fn test_unknown_suite() {
    let project = Project::from_json(SHOP_SIDE).unwrap();
    let err = Exporter::default()
        .render_suite(&project, "nightly", "shop.side")
        .unwrap_err();
    assert_eq!(err.to_string(), "Suite not found: nightly");
}

#[test]
fn test_unsupported_command_fails_export() {
    let json = SHOP_SIDE.replace("\"command\": \"click\", \"target\": \"css=", "\"command\": \"teleport\", \"target\": \"css=");
    let project = Project::from_json(&json).unwrap();
    let err = Exporter::default().render_project(&project, "shop.side").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: teleport");
}
