//! Command emission - translate recorded commands into PHP statements
//!
//! Each supported command name maps to an emitter in the [`CommandTable`].
//! An emitter returns an [`Emission`]: nothing, a single statement, a block
//! of leveled statements with level adjustments, or a raw driver callback.
//!
//! Block structure (if/while/do/forEach/times) is never nested in the
//! output of one emitter. Openers raise the running level after their
//! lines, closers lower it before theirs; [`LevelTracker`] applies that
//! protocol in stream order.

mod codeception;
mod commands;
mod control_flow;
pub mod extras;
mod level;
mod table;
mod window;

pub use control_flow::ControlFlow;
pub use level::LevelTracker;
pub use table::{CommandTable, Emitter};

use crate::command::Command;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::format::{interpolate, quote};
use crate::location::LocatorResolver;

/// Opening line of a raw driver callback
pub const SELENIUM_CALLBACK_OPEN: &str =
    "$I->executeInSelenium(function (\\Facebook\\WebDriver\\Remote\\RemoteWebDriver $webdriver) {";

/// Closing line of a raw driver callback
pub const SELENIUM_CALLBACK_CLOSE: &str = "});";

/// A statement placed at a level relative to the current base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledStatement {
    pub level: usize,
    pub statement: String,
}

impl LeveledStatement {
    pub fn new(level: usize, statement: impl Into<String>) -> Self {
        Self {
            level,
            statement: statement.into(),
        }
    }
}

/// Several statements plus the level changes they cause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub commands: Vec<LeveledStatement>,
    /// Applied to the running level before placing `commands`
    pub starting_level_adjustment: i32,
    /// Applied to the running level after placing `commands`
    pub ending_level_adjustment: i32,
}

impl Block {
    /// Statements with no level change
    pub fn statements(commands: Vec<LeveledStatement>) -> Self {
        Self {
            commands,
            ..Default::default()
        }
    }
}

/// Raw php-webdriver calls run through `executeInSelenium`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    pub body: Vec<String>,
    /// Variable receiving the callback's return value
    pub binding: Option<String>,
}

impl Callback {
    pub fn new(body: Vec<String>) -> Self {
        Self {
            body,
            binding: None,
        }
    }

    pub fn bound_to(mut self, var_name: &str) -> Self {
        if !var_name.is_empty() {
            self.binding = Some(var_name.to_string());
        }
        self
    }

    pub fn statements(&self) -> Vec<LeveledStatement> {
        let open = match &self.binding {
            Some(var) => format!("${} = {}", var, SELENIUM_CALLBACK_OPEN),
            None => SELENIUM_CALLBACK_OPEN.to_string(),
        };
        let mut lines = vec![LeveledStatement::new(0, open)];
        lines.extend(self.body.iter().map(|s| LeveledStatement::new(1, s.clone())));
        lines.push(LeveledStatement::new(0, SELENIUM_CALLBACK_CLOSE));
        lines
    }
}

/// What an emitter produced for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// The command has no counterpart in generated code
    None,
    /// One statement at the current level
    Statement(String),
    Block(Block),
    Callback(Callback),
}

impl Emission {
    pub fn statement(s: impl Into<String>) -> Self {
        Emission::Statement(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Emission::None => true,
            Emission::Statement(s) => s.is_empty(),
            Emission::Block(block) => block.commands.is_empty(),
            Emission::Callback(_) => false,
        }
    }

    /// `(starting, ending)` level adjustments
    pub fn level_adjustments(&self) -> (i32, i32) {
        match self {
            Emission::Block(block) => (
                block.starting_level_adjustment,
                block.ending_level_adjustment,
            ),
            _ => (0, 0),
        }
    }

    /// Flatten into leveled statements relative to the current base
    pub fn lines(&self) -> Vec<LeveledStatement> {
        match self {
            Emission::None => Vec::new(),
            Emission::Statement(s) => vec![LeveledStatement::new(0, s.clone())],
            Emission::Block(block) => block.commands.clone(),
            Emission::Callback(callback) => callback.statements(),
        }
    }
}

/// Everything an emitter may consult besides the command itself
pub struct EmitContext<'a> {
    pub resolver: &'a dyn LocatorResolver,
    pub config: &'a ExportConfig,
    /// Block nesting level the emission will be placed at
    pub depth: usize,
}

impl EmitContext<'_> {
    /// Strict locator for the Codeception API
    pub fn locator(&self, raw: &str) -> Result<String> {
        self.resolver.resolve(raw)
    }

    /// `WebDriverBy` locator for raw driver callbacks
    pub fn driver_locator(&self, raw: &str) -> Result<String> {
        self.resolver.resolve_driver(raw)
    }

    /// Recorded text as a PHP string literal with `${name}` interpolated
    pub fn text(&self, raw: &str) -> String {
        quote(&interpolate(raw))
    }
}

/// Signature of the built-in emitters
pub(crate) type EmitFn = fn(&Command, &EmitContext<'_>) -> Result<Emission>;

/// The built-in command table for Codeception
pub(crate) fn base_emitters() -> Vec<(&'static str, EmitFn)> {
    use commands::*;
    use control_flow::*;
    use window::*;

    vec![
        ("addSelection", emit_select),
        ("answerOnNextPrompt", skip),
        ("assert", emit_assert),
        ("assertAlert", emit_assert_alert),
        ("assertChecked", emit_verify_checked),
        ("assertConfirmation", emit_assert_alert),
        ("assertEditable", emit_verify_editable),
        ("assertElementPresent", emit_verify_element_present),
        ("assertElementNotPresent", emit_verify_element_not_present),
        ("assertNotChecked", emit_verify_not_checked),
        ("assertNotEditable", emit_verify_not_editable),
        ("assertNotSelectedValue", emit_verify_not_selected_value),
        ("assertNotText", emit_verify_not_text),
        ("assertPrompt", emit_assert_alert),
        ("assertSelectedLabel", emit_verify_selected_label),
        ("assertSelectedValue", emit_verify_value),
        ("assertValue", emit_verify_value),
        ("assertText", emit_verify_text),
        ("assertTitle", emit_verify_title),
        ("check", emit_check),
        ("chooseCancelOnNextConfirmation", skip),
        ("chooseCancelOnNextPrompt", skip),
        ("chooseOkOnNextConfirmation", skip),
        ("click", emit_click),
        ("clickAt", emit_click),
        ("close", emit_close),
        ("debugger", skip),
        ("do", emit_do),
        ("doubleClick", emit_double_click),
        ("doubleClickAt", emit_double_click),
        ("dragAndDropToObject", emit_drag_and_drop),
        ("echo", emit_echo),
        ("editContent", emit_edit_content),
        ("else", emit_else),
        ("elseIf", emit_else_if),
        ("end", emit_end),
        ("executeScript", emit_execute_script),
        ("executeAsyncScript", emit_execute_async_script),
        ("forEach", emit_for_each),
        ("if", emit_if),
        ("mouseDown", emit_mouse_down),
        ("mouseDownAt", emit_mouse_down),
        ("mouseMove", emit_mouse_move),
        ("mouseMoveAt", emit_mouse_move_at),
        ("mouseOver", emit_mouse_move),
        ("mouseOut", emit_mouse_out),
        ("mouseUp", emit_mouse_up),
        ("mouseUpAt", emit_mouse_up),
        ("open", emit_open),
        ("pause", emit_pause),
        ("repeatIf", emit_repeat_if),
        ("run", emit_run),
        ("runScript", emit_run_script),
        ("select", emit_select),
        ("removeSelection", emit_remove_selection),
        ("selectFrame", emit_select_frame),
        ("selectWindow", emit_select_window),
        ("sendKeys", emit_send_keys),
        ("setSpeed", emit_set_speed),
        ("setWindowSize", emit_set_window_size),
        ("store", emit_store),
        ("storeAttribute", emit_store_attribute),
        ("storeJson", emit_store_json),
        ("storeText", emit_store_text),
        ("storeTitle", emit_store_title),
        ("storeValue", emit_store_value),
        ("storeWindowHandle", emit_store_window_handle),
        ("storeXpathCount", emit_store_xpath_count),
        ("submit", emit_submit),
        ("times", emit_times),
        ("type", emit_type),
        ("uncheck", emit_uncheck),
        ("verify", emit_assert),
        ("verifyChecked", emit_verify_checked),
        ("verifyEditable", emit_verify_editable),
        ("verifyElementPresent", emit_verify_element_present),
        ("verifyElementNotPresent", emit_verify_element_not_present),
        ("verifyNotChecked", emit_verify_not_checked),
        ("verifyNotEditable", emit_verify_not_editable),
        ("verifyNotSelectedValue", emit_verify_not_selected_value),
        ("verifyNotText", emit_verify_not_text),
        ("verifySelectedLabel", emit_verify_selected_label),
        ("verifySelectedValue", emit_verify_value),
        ("verifyText", emit_verify_text),
        ("verifyTitle", emit_verify_title),
        ("verifyValue", emit_verify_value),
        ("waitForElementEditable", emit_wait_for_element_editable),
        ("waitForElementPresent", emit_wait_for_element_present),
        ("waitForElementVisible", emit_wait_for_element_visible),
        ("waitForElementNotEditable", emit_wait_for_element_not_editable),
        ("waitForElementNotPresent", emit_wait_for_element_not_present),
        ("waitForElementNotVisible", emit_wait_for_element_not_visible),
        ("waitForText", emit_wait_for_text),
        ("webdriverAnswerOnVisiblePrompt", emit_answer_on_visible_prompt),
        ("webdriverChooseCancelOnVisibleConfirmation", emit_choose_cancel_on_visible),
        ("webdriverChooseCancelOnVisiblePrompt", emit_choose_cancel_on_visible),
        ("webdriverChooseOkOnVisibleConfirmation", emit_choose_ok_on_visible),
        ("while", emit_while),
    ]
}
