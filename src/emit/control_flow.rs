//! Control-flow emitters
//!
//! Openers (`if`, `while`, `do`, `forEach`, `times`) raise the level after
//! their line; `elseIf`/`else` drop one level, print, and raise it again;
//! closers (`end`, `repeatIf`) drop one level before printing.

use super::codeception::{call_expr, Action, ArgOrder};
use super::{Block, EmitContext, Emission, LeveledStatement};
use crate::command::{Command, Script};
use crate::error::Result;
use crate::format::{escape_script, floor_number, interpolate, script_arguments, variable};

/// Closed set of block-structuring commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Do,
    If,
    ElseIf,
    Else,
    End,
    While,
    RepeatIf,
    ForEach,
    Times,
}

impl ControlFlow {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "do" => Some(ControlFlow::Do),
            "if" => Some(ControlFlow::If),
            "elseIf" => Some(ControlFlow::ElseIf),
            "else" => Some(ControlFlow::Else),
            "end" => Some(ControlFlow::End),
            "while" => Some(ControlFlow::While),
            "repeatIf" => Some(ControlFlow::RepeatIf),
            "forEach" => Some(ControlFlow::ForEach),
            "times" => Some(ControlFlow::Times),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ControlFlow::Do => "do",
            ControlFlow::If => "if",
            ControlFlow::ElseIf => "elseIf",
            ControlFlow::Else => "else",
            ControlFlow::End => "end",
            ControlFlow::While => "while",
            ControlFlow::RepeatIf => "repeatIf",
            ControlFlow::ForEach => "forEach",
            ControlFlow::Times => "times",
        }
    }

    /// `(starting, ending)` level adjustments
    pub fn level_adjustments(self) -> (i32, i32) {
        match self {
            ControlFlow::Do
            | ControlFlow::If
            | ControlFlow::While
            | ControlFlow::ForEach
            | ControlFlow::Times => (0, 1),
            ControlFlow::ElseIf | ControlFlow::Else => (-1, 1),
            ControlFlow::End | ControlFlow::RepeatIf => (-1, 0),
        }
    }

    fn block(self, commands: Vec<LeveledStatement>) -> Emission {
        let (starting_level_adjustment, ending_level_adjustment) = self.level_adjustments();
        Emission::Block(Block {
            commands,
            starting_level_adjustment,
            ending_level_adjustment,
        })
    }

    fn line(self, statement: String) -> Emission {
        self.block(vec![LeveledStatement::new(0, statement)])
    }
}

/// `$I->executeJS("return <script>"<args>)`
fn condition(ctx: &EmitContext<'_>, raw: &str) -> Result<String> {
    let script = Script::interpolate(raw);
    let args = format!(
        "\"return {}\"{}",
        escape_script(&script.script),
        script_arguments(&script.argv)
    );
    call_expr(ctx, Action::RunScript, None, Some(&args), ArgOrder::LocatorFirst)
}

pub(crate) fn emit_do(_: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(ControlFlow::Do.line("do {".to_string()))
}

pub(crate) fn emit_if(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let cond = condition(ctx, cmd.target())?;
    Ok(ControlFlow::If.line(format!("if ({}) {{", cond)))
}

pub(crate) fn emit_else_if(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let cond = condition(ctx, cmd.target())?;
    Ok(ControlFlow::ElseIf.line(format!("}} else if ({}) {{", cond)))
}

pub(crate) fn emit_else(_: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(ControlFlow::Else.line("} else {".to_string()))
}

pub(crate) fn emit_end(_: &Command, _: &EmitContext<'_>) -> Result<Emission> {
    Ok(ControlFlow::End.line("}".to_string()))
}

pub(crate) fn emit_while(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let cond = condition(ctx, cmd.target())?;
    Ok(ControlFlow::While.line(format!("while({}) {{", cond)))
}

pub(crate) fn emit_repeat_if(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let cond = condition(ctx, cmd.target())?;
    Ok(ControlFlow::RepeatIf.line(format!("}} while({});", cond)))
}

/// Loop variables are suffixed with the nesting depth so inner loops keep
/// the outer collection and counter intact.
pub(crate) fn emit_for_each(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let collection = variable(&interpolate(cmd.target()).replace('$', ""));
    let d = ctx.depth;
    Ok(ControlFlow::ForEach.block(vec![
        LeveledStatement::new(0, format!("$collection_{} = {};", d, collection)),
        LeveledStatement::new(
            0,
            format!("for ($i_{d} = 0; $i_{d} < count($collection_{d}); $i_{d}++) {{", d = d),
        ),
        LeveledStatement::new(
            1,
            format!("{} = $collection_{d}[$i_{d}];", variable(cmd.value()), d = d),
        ),
    ]))
}

pub(crate) fn emit_times(cmd: &Command, ctx: &EmitContext<'_>) -> Result<Emission> {
    let d = ctx.depth;
    Ok(ControlFlow::Times.block(vec![
        LeveledStatement::new(
            0,
            format!("$times_{} = {};", d, floor_number(&interpolate(cmd.target()))),
        ),
        LeveledStatement::new(0, format!("for ($i_{d} = 0; $i_{d} < $times_{d}; $i_{d}++) {{", d = d)),
    ]))
}
