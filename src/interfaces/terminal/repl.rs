use super::render::render;
use crate::application::form::PayoutForm;
use crate::domain::form::FormField;
use crate::domain::ports::PayoutGateway;
use crate::error::{PayoutError, Result};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  set <field> <value>   change a field (e.g. `set amount 1500`); the value
                        is everything after the first space, untrimmed
  clear <field>         empty a field
  show                  display the form
  submit                validate and send the payout
  help                  show this message
  quit | exit           leave
Fields: amount, customerName, customerPhoneNumber, customerEmail,
        transactionType, destinationBank, accountNumber,
        beneficiaryLocation, ifsc, reference";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Clear(FormField),
    Show,
    Submit,
    Help,
    Quit,
}

fn parse_field(name: &str) -> Result<FormField> {
    name.parse()
        .map_err(|_| PayoutError::UnknownField(name.to_string()))
}

/// Parses one input line. Blank lines yield `None`.
///
/// A `set` value is taken verbatim from the character after the field
/// name's separator, so leading and trailing whitespace reach the form.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();

    let command = match word.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Set(parse_field(field)?, value.to_string())
        }
        "clear" => Command::Clear(parse_field(rest.trim_end())?),
        "show" => Command::Show,
        "submit" => Command::Submit,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(PayoutError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

/// Drives a mounted form from line-oriented input until `quit` or end of
/// input. Command errors are reported on `output` and do not end the session.
pub async fn run<G, R, W>(form: &mut PayoutForm<G>, input: R, mut output: W) -> Result<()>
where
    G: PayoutGateway,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render(&form.view()))?;
    writeln!(output, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Set(field, value) => {
                if let Err(e) = form.change(field, value) {
                    writeln!(output, "error: {e}")?;
                }
            }
            Command::Clear(field) => {
                if let Err(e) = form.change(field, "") {
                    writeln!(output, "error: {e}")?;
                }
            }
            Command::Show => write!(output, "{}", render(&form.view()))?,
            Command::Submit => {
                writeln!(output, "Submitting...")?;
                output.flush()?;
                if let Err(e) = form.submit().await {
                    writeln!(output, "error: {e}")?;
                }
                write!(output, "{}", render(&form.view()))?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
        output.flush()?;
    }
    Ok(())
}
