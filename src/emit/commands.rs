//! Emitters for plain and compound commands

use super::codeception::{
    call, call_expr, emit_call, expected_condition, selenium, Action, ArgOrder,
};
use super::{Block, Callback, EmitContext, Emission, LeveledStatement};
use crate::command::{Command, KeyPart, Script};
use crate::error::{Error, Result};
use crate::format::{
    arguments, assign, escape, escape_script, floor_number, interpolate, literal,
    script_arguments, single_quote, variable,
};
use crate::util::sanitize_name;
use regex::Regex;
use std::sync::OnceLock;

/// Recorder-only commands
pub(crate) fn skip(_: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(Emission::None)
}

/// `label=Foo` → `Foo`
fn option_label(cmd: &Command) -> Result<&str> {
    cmd.value().split('=').nth(1).ok_or_else(|| {
        Error::malformed(
            &cmd.name,
            format!("option `{}` is not of the form label=...", cmd.value()),
        )
    })
}

pub(crate) fn emit_select(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let option = ctx.text(option_label(cmd)?);
    emit_call(ctx, Action::Select, Some(cmd.target()), Some(&option))
}

pub(crate) fn emit_remove_selection(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let option = ctx.text(option_label(cmd)?);
    emit_call(ctx, Action::RemoveSelection, Some(cmd.target()), Some(&option))
}

pub(crate) fn emit_assert(cmd: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(Emission::Statement(format!(
        "$I->assertEquals({}, {});",
        variable(cmd.target()),
        literal(cmd.value())
    )))
}

pub(crate) fn emit_assert_alert(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::AssertAlert, None, Some(&ctx.text(cmd.target())))
}

pub(crate) fn emit_answer_on_visible_prompt(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let answer = call(
        ctx,
        Action::AnswerOnNextPrompt,
        None,
        Some(&ctx.text(cmd.target())),
        ArgOrder::LocatorFirst,
    )?;
    let accept = call(ctx, Action::ChooseOkOnNextConfirmation, None, None, ArgOrder::LocatorFirst)?;
    Ok(Emission::Block(Block::statements(vec![
        LeveledStatement::new(0, answer),
        LeveledStatement::new(0, accept),
    ])))
}

pub(crate) fn emit_choose_cancel_on_visible(_: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::ChooseCancelOnNextConfirmation, None, None)
}

pub(crate) fn emit_choose_ok_on_visible(_: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::ChooseOkOnNextConfirmation, None, None)
}

pub(crate) fn emit_check(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Check, Some(cmd.target()), None)
}

pub(crate) fn emit_uncheck(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Uncheck, Some(cmd.target()), None)
}

pub(crate) fn emit_click(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Click, Some(cmd.target()), None)
}

pub(crate) fn emit_submit(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Click, Some(cmd.target()), None)
}

pub(crate) fn emit_double_click(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::DoubleClick, Some(cmd.target()), None)
}

pub(crate) fn emit_close(_: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::CloseTab, None, None)
}

pub(crate) fn emit_drag_and_drop(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let dragged = ctx.locator(cmd.target())?;
    let dropped = ctx.locator(cmd.value())?;
    Ok(Emission::Statement(format!(
        "$I->{}({}, {});",
        Action::DragAndDrop.method(),
        dragged,
        dropped
    )))
}

pub(crate) fn emit_echo(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let message = interpolate(cmd.target());
    let message = if message.starts_with('$') {
        message
    } else {
        ctx.text(cmd.target())
    };
    emit_call(ctx, Action::Comment, None, Some(&message))
}

pub(crate) fn emit_edit_content(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let by = ctx.driver_locator(cmd.target())?;
    let content = interpolate(cmd.value())
        .replace('\\', "\\\\")
        .replace('\'', "\\'");
    let script = format!(
        "if(arguments[0].contentEditable === 'true') {{arguments[0].innerText = '{}'}}",
        content
    );
    Ok(selenium(vec![
        format!("$element = $webdriver->findElement({});", by),
        format!("$webdriver->executeScript(\"{}\", [$element]);", escape(&script)),
    ]))
}

pub(crate) fn emit_execute_script(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let script = Script::interpolate(cmd.target());
    let expr = call_expr(
        ctx,
        Action::RunScript,
        None,
        Some(&format!(
            "\"{}\"{}",
            escape_script(&script.script),
            script_arguments(&script.argv)
        )),
        ArgOrder::LocatorFirst,
    )?;
    Ok(Emission::Statement(assign(cmd.value(), &expr)))
}

pub(crate) fn emit_execute_async_script(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let script = Script::interpolate(cmd.target());
    let body = format!(
        "var callback = arguments[arguments.length - 1];{}.then(callback).catch(callback);",
        script.script
    );
    let expr = call_expr(
        ctx,
        Action::ExecuteAsyncScript,
        None,
        Some(&format!(
            "\"{}\"{}",
            escape_script(&body),
            script_arguments(&script.argv)
        )),
        ArgOrder::LocatorFirst,
    )?;
    Ok(Emission::Statement(assign(cmd.value(), &expr)))
}

pub(crate) fn emit_run_script(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let script = Script::interpolate(cmd.target());
    let args = format!(
        "\"{}\"{}",
        escape_script(&script.script),
        script_arguments(&script.argv)
    );
    emit_call(ctx, Action::RunScript, None, Some(&args))
}

fn mouse_button(cmd: &Command, ctx: &EmitContext<'_>, method: &str) -> Result<Emission> {
    let by = ctx.driver_locator(cmd.target())?;
    Ok(selenium(vec![
        format!(
            "$coordinates = $webdriver->findElement({})->getCoordinates();",
            by
        ),
        format!("$webdriver->getMouse()->{}($coordinates);", method),
    ]))
}

pub(crate) fn emit_mouse_down(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    mouse_button(cmd, ctx, "mouseDown")
}

pub(crate) fn emit_mouse_up(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    mouse_button(cmd, ctx, "mouseUp")
}

pub(crate) fn emit_mouse_move(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::MouseMove, Some(cmd.target()), None)
}

pub(crate) fn emit_mouse_move_at(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    if cmd.value().is_empty() {
        return emit_mouse_move(cmd, ctx);
    }
    let (x, y) = cmd.value().split_once(',').ok_or_else(|| {
        Error::malformed(
            &cmd.name,
            format!("offset `{}` is not of the form x,y", cmd.value()),
        )
    })?;
    let offsets = format!("{}, {}", floor_number(x), floor_number(y));
    emit_call(ctx, Action::MouseMove, Some(cmd.target()), Some(&offsets))
}

pub(crate) fn emit_mouse_out(_: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::MouseMove, None, Some("\"body\", 0, 0"))
}

pub(crate) fn emit_open(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    static URL: OnceLock<Regex> = OnceLock::new();
    let url = URL.get_or_init(|| Regex::new(r"^(file|https?)://").expect("url pattern is valid"));
    let target = cmd.target();
    let action = if url.is_match(target) {
        Action::OpenUrl
    } else {
        Action::OpenPage
    };
    emit_call(ctx, action, None, Some(&ctx.text(target)))
}

pub(crate) fn emit_pause(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Pause, None, Some(&floor_number(cmd.target())))
}

pub(crate) fn emit_run(cmd: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(Emission::Statement(format!(
        "$this->{}($I);",
        sanitize_name(cmd.target())
    )))
}

fn send_keys_input(raw: &str) -> String {
    let parts: Vec<String> = KeyPart::parse(raw)
        .into_iter()
        .map(|part| match part {
            KeyPart::Text(text) => crate::format::quote(&text),
            KeyPart::Key(key) => format!("\\Facebook\\WebDriver\\WebDriverKeys::{}", key),
            KeyPart::Variable(name) => variable(&name),
        })
        .collect();
    arguments(&parts)
}

pub(crate) fn emit_send_keys(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let keys = send_keys_input(cmd.value());
    emit_call(ctx, Action::SendKeys, Some(cmd.target()), Some(&keys))
}

pub(crate) fn emit_set_speed(_: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(
        ctx,
        Action::Comment,
        None,
        Some("\"`set speed` is a no-op in code export, use `pause` instead\""),
    )
}

pub(crate) fn emit_set_window_size(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let (width, height) = cmd.target().split_once('x').ok_or_else(|| {
        Error::malformed(
            &cmd.name,
            format!("size `{}` is not of the form WIDTHxHEIGHT", cmd.target()),
        )
    })?;
    let size = format!("{}, {}", width.trim(), height.trim());
    emit_call(ctx, Action::ResizeWindow, None, Some(&size))
}

pub(crate) fn emit_store(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    Ok(Emission::Statement(assign(cmd.value(), &ctx.text(cmd.target()))))
}

pub(crate) fn emit_store_attribute(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let target = cmd.target();
    let at = target.rfind('@').ok_or_else(|| {
        Error::malformed(
            &cmd.name,
            format!("`{}` is not of the form locator@attribute", target),
        )
    })?;
    let (element, attribute) = (&target[..at], &target[at + 1..]);
    let grab = call(
        ctx,
        Action::StoreAttribute,
        Some(element),
        Some(&ctx.text(attribute)),
        ArgOrder::LocatorFirst,
    )?;
    Ok(Emission::Block(Block::statements(vec![
        LeveledStatement::new(0, "{"),
        LeveledStatement::new(1, format!("$attribute = {}", grab)),
        LeveledStatement::new(1, assign(cmd.value(), "$attribute")),
        LeveledStatement::new(0, "}"),
    ])))
}

pub(crate) fn emit_store_json(cmd: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    let expr = format!("json_decode({})", single_quote(cmd.target()));
    Ok(Emission::Statement(assign(cmd.value(), &expr)))
}

fn store_grab(cmd: &Command, ctx: &EmitContext<'_>, action: Action) -> Result<Emission> {
    let expr = call_expr(ctx, action, Some(cmd.target()), None, ArgOrder::LocatorFirst)?;
    Ok(Emission::Statement(assign(cmd.value(), &expr)))
}

pub(crate) fn emit_store_text(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    store_grab(cmd, ctx, Action::StoreText)
}

pub(crate) fn emit_store_value(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    store_grab(cmd, ctx, Action::StoreValue)
}

pub(crate) fn emit_store_title(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    // Older recordings put the variable in the target
    let var_name = if cmd.value().is_empty() {
        cmd.target()
    } else {
        cmd.value()
    };
    let expr = call_expr(ctx, Action::StoreTitle, None, None, ArgOrder::LocatorFirst)?;
    Ok(Emission::Statement(assign(var_name, &expr)))
}

pub(crate) fn emit_store_window_handle(cmd: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(Emission::Callback(
        Callback::new(vec!["return $webdriver->getWindowHandle();".to_string()])
            .bound_to(cmd.target()),
    ))
}

pub(crate) fn emit_store_xpath_count(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let grab = call_expr(
        ctx,
        Action::StoreMultiple,
        Some(cmd.target()),
        None,
        ArgOrder::LocatorFirst,
    )?;
    Ok(Emission::Statement(assign(
        cmd.value(),
        &format!("count({})", grab),
    )))
}

pub(crate) fn emit_type(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::Type, Some(cmd.target()), Some(&ctx.text(cmd.value())))
}

pub(crate) fn emit_verify_checked(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::VerifyChecked, Some(cmd.target()), None)
}

pub(crate) fn emit_verify_not_checked(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::VerifyNotChecked, Some(cmd.target()), None)
}

fn verify_enabled(cmd: &Command, ctx: &EmitContext<'_>, expected: bool) -> Result<Emission> {
    let by = ctx.driver_locator(cmd.target())?;
    let assertion = if expected { "assertTrue" } else { "assertFalse" };
    Ok(selenium(vec![format!(
        "\\PHPUnit\\Framework\\Assert::{}($webdriver->findElement({})->isEnabled());",
        assertion, by
    )]))
}

pub(crate) fn emit_verify_editable(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    verify_enabled(cmd, ctx, true)
}

pub(crate) fn emit_verify_not_editable(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    verify_enabled(cmd, ctx, false)
}

pub(crate) fn emit_verify_element_present(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    emit_call(ctx, Action::VerifyElementPresent, Some(cmd.target()), None)
}

pub(crate) fn emit_verify_element_not_present(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    emit_call(ctx, Action::VerifyElementNotPresent, Some(cmd.target()), None)
}

pub(crate) fn emit_verify_not_selected_value(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let expected = ctx.text(cmd.value());
    emit_call(ctx, Action::VerifyNotSelectedValue, Some(cmd.target()), Some(&expected))
}

pub(crate) fn emit_verify_not_text(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    call(
        ctx,
        Action::VerifyNotText,
        Some(cmd.target()),
        Some(cmd.value()),
        ArgOrder::ValueFirst,
    )
    .map(Emission::Statement)
}

pub(crate) fn emit_verify_selected_label(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let label = ctx.text(cmd.value());
    emit_call(ctx, Action::VerifySelectedLabel, Some(cmd.target()), Some(&label))
}

pub(crate) fn emit_verify_text(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    call(
        ctx,
        Action::VerifyText,
        Some(cmd.target()),
        Some(cmd.value()),
        ArgOrder::ValueFirst,
    )
    .map(Emission::Statement)
}

pub(crate) fn emit_verify_value(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let expected = ctx.text(cmd.value());
    emit_call(ctx, Action::VerifyValue, Some(cmd.target()), Some(&expected))
}

pub(crate) fn emit_verify_title(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    emit_call(ctx, Action::VerifyTitle, None, Some(&ctx.text(cmd.target())))
}

pub(crate) fn emit_wait_for_element_present(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let timeout = floor_number(cmd.value());
    emit_call(ctx, Action::WaitForElementPresent, Some(cmd.target()), Some(&timeout))
}

pub(crate) fn emit_wait_for_element_visible(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let timeout = floor_number(cmd.value());
    emit_call(ctx, Action::WaitForElementVisible, Some(cmd.target()), Some(&timeout))
}

pub(crate) fn emit_wait_for_element_not_visible(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    let timeout = floor_number(cmd.value());
    emit_call(ctx, Action::WaitForElementNotVisible, Some(cmd.target()), Some(&timeout))
}

/// `$webdriver->wait(t)->until(condition);` inside a driver callback
fn wait_until(cmd: &Command, ctx: &EmitContext<'_>, condition: fn(&str) -> String) -> Result<Emission> {
    let by = ctx.driver_locator(cmd.target())?;
    Ok(selenium(vec![format!(
        "$webdriver->wait({})->until({});",
        floor_number(cmd.value()),
        condition(&by)
    )]))
}

pub(crate) fn emit_wait_for_element_not_present(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    wait_until(cmd, ctx, |by| {
        expected_condition("not", &expected_condition("presenceOfElementLocated", by))
    })
}

pub(crate) fn emit_wait_for_element_editable(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    wait_until(cmd, ctx, |by| expected_condition("elementToBeClickable", by))
}

pub(crate) fn emit_wait_for_element_not_editable(
    cmd: &Command,
    ctx: &EmitContext<'_>,
) -> Result<Emission> {
    wait_until(cmd, ctx, |by| {
        expected_condition("not", &expected_condition("elementToBeClickable", by))
    })
}

pub(crate) fn emit_wait_for_text(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let locator = ctx.locator(cmd.target())?;
    Ok(Emission::Statement(format!(
        "$I->{}({}, {}, {});",
        Action::WaitForText.method(),
        ctx.text(cmd.value()),
        ctx.config.wait_for_text_timeout,
        locator
    )))
}
