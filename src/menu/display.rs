//! The interactive display loop.
//!
//! Each level renders its menu, reads selections until one is usable and
//! dispatches it. Submenus run as a nested call that blocks the parent until
//! the user leaves with `0`. End of input unwinds every level at once.

use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::MenuResult;

use super::entry::EntryKind;
use super::input::{parse_selection, read_line, Selection};
use super::node::MenuId;
use super::render::{invalid_choice_message, render_menu, INVALID_INPUT_MESSAGE, PROMPT};
use super::tree::MenuTree;

/// Options for a display session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Write each selection line back to the output after reading it
    pub echo_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The user left the level with `0`
    Returned,
    /// The input source is exhausted
    EndOfInput,
}

impl MenuTree {
    /// Run the menu loop for `menu` until the user selects `0`.
    ///
    /// Returns early, without error, when `input` reaches end of file.
    pub fn display<R, W>(&mut self, menu: MenuId, input: &mut R, output: &mut W) -> MenuResult<()>
    where
        R: BufRead,
        W: Write,
    {
        self.display_with_options(menu, input, output, &DisplayOptions::default())
    }

    /// Same as [`display`](Self::display) with explicit options
    pub fn display_with_options<R, W>(
        &mut self,
        menu: MenuId,
        input: &mut R,
        output: &mut W,
        options: &DisplayOptions,
    ) -> MenuResult<()>
    where
        R: BufRead,
        W: Write,
    {
        self.node(menu)?;
        debug!(menu = %menu, echo = options.echo_input, "starting display");

        if self.run(menu, input, output, options, 0)? == Outcome::EndOfInput {
            debug!("input ended before the menu was exited");
        }
        output.flush()?;
        Ok(())
    }

    /// Display on the process stdin/stdout.
    ///
    /// Stdin stays locked for the whole session; actions must not read from it.
    pub fn display_stdio(&mut self, menu: MenuId) -> MenuResult<()> {
        self.display_stdio_with_options(menu, &DisplayOptions::default())
    }

    pub fn display_stdio_with_options(
        &mut self,
        menu: MenuId,
        options: &DisplayOptions,
    ) -> MenuResult<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.display_with_options(menu, &mut input, &mut output, options)
    }

    fn run(
        &mut self,
        menu: MenuId,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        options: &DisplayOptions,
        depth: usize,
    ) -> MenuResult<Outcome> {
        loop {
            let node = self.node(menu)?;
            let item_count = node.len();
            output.write_all(render_menu(node).as_bytes())?;
            trace!(menu = node.title(), depth, "rendered menu");

            let Some(selection) = read_choice(input, output, options, item_count)? else {
                return Ok(Outcome::EndOfInput);
            };

            match selection {
                Selection::Exit => {
                    debug!(menu = %menu, depth, "leaving menu");
                    return Ok(Outcome::Returned);
                }
                Selection::Item(n) => {
                    if self.dispatch(menu, n - 1, input, output, options, depth)?
                        == Outcome::EndOfInput
                    {
                        return Ok(Outcome::EndOfInput);
                    }
                }
                Selection::OutOfRange(choice) => {
                    debug!(choice, item_count, "selection out of range");
                    output.write_all(invalid_choice_message(item_count).as_bytes())?;
                }
                Selection::Malformed | Selection::Blank => {}
            }
        }
    }

    fn dispatch(
        &mut self,
        menu: MenuId,
        index: usize,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        options: &DisplayOptions,
        depth: usize,
    ) -> MenuResult<Outcome> {
        let Some(entry) = self.node_mut(menu)?.item_mut(index) else {
            return Ok(Outcome::Returned);
        };
        let name = entry.name().to_string();

        let child = match entry.kind_mut() {
            EntryKind::Action(action) => {
                debug!(menu = %menu, entry = %name, "running action");
                // Output written by the action must follow the prompt
                output.flush()?;
                action();
                return Ok(Outcome::Returned);
            }
            EntryKind::Submenu(child) => *child,
        };

        debug!(menu = %menu, entry = %name, submenu = %child, "entering submenu");
        let outcome = self.run(child, input, output, options, depth + 1)?;
        debug!(menu = %menu, submenu = %child, "back from submenu");
        Ok(outcome)
    }
}

/// Read lines until one parses to a number. Returns `None` at end of input.
///
/// Malformed lines are reported and re-prompted without redrawing the menu;
/// blank lines are skipped.
fn read_choice(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    options: &DisplayOptions,
    item_count: usize,
) -> MenuResult<Option<Selection>> {
    loop {
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if options.echo_input {
            writeln!(output, "{}", line)?;
        }

        match parse_selection(&line, item_count) {
            Selection::Blank => continue,
            Selection::Malformed => {
                debug!(input = %line, "selection is not a number");
                output.write_all(INVALID_INPUT_MESSAGE.as_bytes())?;
                output.write_all(PROMPT.as_bytes())?;
            }
            selection => return Ok(Some(selection)),
        }
    }
}
