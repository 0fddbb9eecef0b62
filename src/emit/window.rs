//! Frame and window switching, plus new-window handling

use super::codeception::{emit_call, selenium, Action};
use super::{EmitContext, Emission, LeveledStatement};
use crate::command::Command;
use crate::error::{Error, Result};
use crate::format::{floor_number, interpolate, variable};

pub(crate) fn emit_select_frame(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let target = cmd.target();
    let body = match target {
        "relative=top" | "relative=parent" => {
            vec!["$webdriver->switchTo()->defaultContent();".to_string()]
        }
        _ => match target.strip_prefix("index=") {
            Some(index) => vec![format!(
                "$webdriver->switchTo()->frame({});",
                floor_number(index)
            )],
            None => vec![
                format!("$element = $webdriver->findElement({});", ctx.driver_locator(target)?),
                "$webdriver->switchTo()->frame($element);".to_string(),
            ],
        },
    };
    Ok(selenium(body))
}

pub(crate) fn emit_select_window(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let target = cmd.target();
    if let Some(handle) = target.strip_prefix("handle=") {
        let handle = interpolate(handle);
        let handle = if handle.starts_with('$') {
            handle
        } else {
            ctx.text(&handle)
        };
        return emit_call(ctx, Action::SwitchToWindow, None, Some(&handle));
    }
    if let Some(name) = target.strip_prefix("name=") {
        return emit_call(ctx, Action::SwitchToWindow, None, Some(&ctx.text(name)));
    }
    if let Some(index) = target.strip_prefix("win_ser_") {
        let index = if index == "local" {
            "0".to_string()
        } else {
            floor_number(index)
        };
        if index.parse::<u64>().is_ok() {
            return Ok(selenium(vec![
                "$handles = $webdriver->getWindowHandles();".to_string(),
                format!("$webdriver->switchTo()->window($handles[{}]);", index),
            ]));
        }
    }
    Err(Error::UnsupportedVariant(
        "Can only emit `select window` using handles".to_string(),
    ))
}

/// Snapshot window handles before `lines` run, then wait for the new one
pub(crate) fn with_new_window_handling(
    cmd: &Command,
    lines: Vec<LeveledStatement>,
    default_timeout: u64,
) -> Vec<LeveledStatement> {
    let timeout = cmd.window_timeout.unwrap_or(default_timeout);
    let mut wrapped = Vec::with_capacity(lines.len() + 2);
    wrapped.push(LeveledStatement::new(
        0,
        format!(
            "$windowHandles = {} return $webdriver->getWindowHandles(); }});",
            super::SELENIUM_CALLBACK_OPEN
        ),
    ));
    wrapped.extend(lines);
    wrapped.push(LeveledStatement::new(
        0,
        format!(
            "{} = $this->waitForWindow($I, $windowHandles, {});",
            variable(&cmd.window_handle_name),
            timeout
        ),
    ));
    wrapped
}
