//! Control-flow rendering through the level protocol

use pretty_assertions::assert_eq;
use side_export::{render_lines, Command, Error, Exporter, Test};

fn cmd(name: &str, target: &str) -> Command {
    Command::new(name).with_target(target)
}

fn render(commands: Vec<Command>) -> side_export::Result<String> {
    let test = Test {
        id: "t".into(),
        name: "flow".into(),
        commands,
    };
    let lines = Exporter::default().render_test(&test)?;
    Ok(render_lines(&lines, "  "))
}

#[test]
fn test_do_repeat_if() {
    let out = render(vec![
        Command::new("do"),
        cmd("click", "id=next"),
        cmd("repeatIf", "${page} < ${last}"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            "do {",
            r#"  $I->click(["id" => "next"]);"#,
            r#"} while($I->executeJS("return arguments[0] < arguments[1]", $page,$last));"#,
        ]
        .join("\n")
    );
}

#[test]
fn test_if_else_if_else_chain() {
    let out = render(vec![
        cmd("if", "${n} == 1"),
        cmd("click", "id=one"),
        cmd("elseIf", "${n} == 2"),
        cmd("click", "id=two"),
        cmd("elseIf", "${n} == 3"),
        cmd("click", "id=three"),
        Command::new("else"),
        cmd("click", "id=other"),
        Command::new("end"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            r#"if ($I->executeJS("return arguments[0] == 1", $n)) {"#,
            r#"  $I->click(["id" => "one"]);"#,
            r#"} else if ($I->executeJS("return arguments[0] == 2", $n)) {"#,
            r#"  $I->click(["id" => "two"]);"#,
            r#"} else if ($I->executeJS("return arguments[0] == 3", $n)) {"#,
            r#"  $I->click(["id" => "three"]);"#,
            "} else {",
            r#"  $I->click(["id" => "other"]);"#,
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_nested_loops() {
    let out = render(vec![
        Command::new("forEach").with_target("rows").with_value("row"),
        cmd("while", "${more}"),
        cmd("times", "2"),
        cmd("click", "id=x"),
        Command::new("end"),
        Command::new("end"),
        Command::new("end"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            "$collection_0 = $rows;",
            "for ($i_0 = 0; $i_0 < count($collection_0); $i_0++) {",
            "  $row = $collection_0[$i_0];",
            r#"  while($I->executeJS("return arguments[0]", $more)) {"#,
            "    $times_2 = 2;",
            "    for ($i_2 = 0; $i_2 < $times_2; $i_2++) {",
            r#"      $I->click(["id" => "x"]);"#,
            "    }",
            "  }",
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_nested_for_each_keeps_outer_collection() {
    let out = render(vec![
        Command::new("forEach").with_target("rows").with_value("row"),
        Command::new("forEach").with_target("cols").with_value("col"),
        cmd("click", "id=cell"),
        Command::new("end"),
        Command::new("end"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            "$collection_0 = $rows;",
            "for ($i_0 = 0; $i_0 < count($collection_0); $i_0++) {",
            "  $row = $collection_0[$i_0];",
            "  $collection_1 = $cols;",
            "  for ($i_1 = 0; $i_1 < count($collection_1); $i_1++) {",
            "    $col = $collection_1[$i_1];",
            r#"    $I->click(["id" => "cell"]);"#,
            "  }",
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_compound_block_inside_if() {
    let out = render(vec![
        cmd("if", "true"),
        Command::new("storeAttribute")
            .with_target("id=logo@src")
            .with_value("src"),
        Command::new("end"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            r#"if ($I->executeJS("return true")) {"#,
            "  {",
            r#"    $attribute = $I->grabAttributeFrom(["id" => "logo"], "src");"#,
            "    $src = $attribute;",
            "  }",
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_callback_inside_while() {
    let out = render(vec![
        cmd("while", "true"),
        cmd("selectFrame", "relative=top"),
        Command::new("end"),
    ])
    .unwrap();
    assert_eq!(
        out,
        [
            r#"while($I->executeJS("return true")) {"#,
            r#"  $I->executeInSelenium(function (\Facebook\WebDriver\Remote\RemoteWebDriver $webdriver) {"#,
            "    $webdriver->switchTo()->defaultContent();",
            "  });",
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_stray_end_is_rejected() {
    let result = render(vec![cmd("click", "id=a"), Command::new("end")]);
    assert!(matches!(
        result,
        Err(Error::UnbalancedControlFlow { ref command, level: -1 }) if command == "end"
    ));
}

#[test]
fn test_missing_end_is_rejected() {
    let result = render(vec![cmd("while", "true"), cmd("click", "id=a")]);
    assert!(matches!(
        result,
        Err(Error::UnbalancedControlFlow { level: 1, .. })
    ));
}
