//! Codeception call assembly
//!
//! Most commands become a single `$I->method(...)` call. The method comes
//! from a fixed action table; arguments are the resolved locator and an
//! optional value, in the order the method expects.

use super::{Callback, EmitContext, Emission};
use crate::error::Result;
use crate::format::{interpolate, quote};

/// Actions with a Codeception WebDriver counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    AnswerOnNextPrompt,
    AssertAlert,
    Check,
    ChooseCancelOnNextConfirmation,
    ChooseOkOnNextConfirmation,
    Click,
    CloseTab,
    Comment,
    DoubleClick,
    DragAndDrop,
    ExecuteAsyncScript,
    MouseMove,
    OpenPage,
    OpenUrl,
    Pause,
    RemoveSelection,
    ResizeWindow,
    RunScript,
    Select,
    SendKeys,
    StoreAttribute,
    StoreMultiple,
    StoreText,
    StoreTitle,
    StoreValue,
    SwitchToWindow,
    Type,
    Uncheck,
    VerifyChecked,
    VerifyElementNotPresent,
    VerifyElementPresent,
    VerifyNotChecked,
    VerifyNotSelectedValue,
    VerifyNotText,
    VerifySelectedLabel,
    VerifyText,
    VerifyTitle,
    VerifyValue,
    WaitForElementNotVisible,
    WaitForElementPresent,
    WaitForElementVisible,
    WaitForText,
}

impl Action {
    /// Codeception method name
    pub(crate) fn method(self) -> &'static str {
        match self {
            Action::AnswerOnNextPrompt => "typeInPopup",
            Action::AssertAlert => "seeInPopup",
            Action::Check => "checkOption",
            Action::ChooseCancelOnNextConfirmation => "cancelPopup",
            Action::ChooseOkOnNextConfirmation => "acceptPopup",
            Action::Click => "click",
            Action::CloseTab => "closeTab",
            Action::Comment => "comment",
            Action::DoubleClick => "doubleClick",
            Action::DragAndDrop => "dragAndDrop",
            Action::ExecuteAsyncScript => "executeAsyncJS",
            Action::MouseMove => "moveMouseOver",
            Action::OpenPage => "amOnPage",
            Action::OpenUrl => "amOnUrl",
            Action::Pause => "wait",
            Action::RemoveSelection => "unselectOption",
            Action::ResizeWindow => "resizeWindow",
            Action::RunScript => "executeJS",
            Action::Select => "selectOption",
            Action::SendKeys => "pressKey",
            Action::StoreAttribute => "grabAttributeFrom",
            Action::StoreMultiple => "grabMultiple",
            Action::StoreText => "grabTextFrom",
            Action::StoreTitle => "grabTitle",
            Action::StoreValue => "grabValueFrom",
            Action::SwitchToWindow => "switchToWindow",
            Action::Type => "fillField",
            Action::Uncheck => "uncheckOption",
            Action::VerifyChecked => "seeCheckboxIsChecked",
            Action::VerifyElementNotPresent => "dontSeeElementInDOM",
            Action::VerifyElementPresent => "seeElementInDOM",
            Action::VerifyNotChecked => "dontSeeCheckboxIsChecked",
            Action::VerifyNotSelectedValue => "dontSeeInField",
            Action::VerifyNotText => "dontSee",
            Action::VerifySelectedLabel => "seeOptionIsSelected",
            Action::VerifyText => "see",
            Action::VerifyTitle => "seeInTitle",
            Action::VerifyValue => "seeInField",
            Action::WaitForElementNotVisible => "waitForElementNotVisible",
            Action::WaitForElementPresent => "waitForElement",
            Action::WaitForElementVisible => "waitForElementVisible",
            Action::WaitForText => "waitForText",
        }
    }
}

/// Argument order of a locator-and-value call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgOrder {
    /// `method(locator, value)`; value is already a PHP expression
    LocatorFirst,
    /// `method("value", locator)`; value is recorded text and gets quoted
    ValueFirst,
}

/// `$I->method(args)` without the trailing semicolon.
/// Empty locator or value counts as absent.
pub(crate) fn call_expr(
    ctx: &EmitContext<'_>,
    action: Action,
    locator: Option<&str>,
    value: Option<&str>,
    order: ArgOrder,
) -> Result<String> {
    let locator = locator.filter(|l| !l.is_empty());
    let value = value.filter(|v| !v.is_empty());

    let args = match (locator, value) {
        (None, None) => String::new(),
        (None, Some(value)) => value.to_string(),
        (Some(locator), None) => ctx.locator(locator)?,
        (Some(locator), Some(value)) => {
            let loc = ctx.locator(locator)?;
            match order {
                ArgOrder::LocatorFirst => format!("{}, {}", loc, value),
                ArgOrder::ValueFirst => format!("{}, {}", quote(&interpolate(value)), loc),
            }
        }
    };
    Ok(format!("$I->{}({})", action.method(), args))
}

/// A complete `$I->method(args);` statement
pub(crate) fn call(
    ctx: &EmitContext<'_>,
    action: Action,
    locator: Option<&str>,
    value: Option<&str>,
    order: ArgOrder,
) -> Result<String> {
    Ok(format!("{};", call_expr(ctx, action, locator, value, order)?))
}

/// Shorthand for the common single-statement case
pub(crate) fn emit_call(
    ctx: &EmitContext<'_>,
    action: Action,
    locator: Option<&str>,
    value: Option<&str>,
) -> Result<Emission> {
    call(ctx, action, locator, value, ArgOrder::LocatorFirst).map(Emission::Statement)
}

/// Raw driver calls for things the Codeception API cannot express
pub(crate) fn selenium(body: Vec<String>) -> Emission {
    Emission::Callback(Callback::new(body))
}

/// Fully qualified `WebDriverExpectedCondition` call
pub(crate) fn expected_condition(name: &str, arg: &str) -> String {
    format!(
        "\\Facebook\\WebDriver\\WebDriverExpectedCondition::{}({})",
        name, arg
    )
}
