//! Line-oriented stand-in for the slider page.
//!
//! Each accepted command updates the [`PlotState`] and reprints the
//! read-outs, mirroring a slider drag.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use corrplot_core::{NoiseSource, PlotParams, PlotState};

use crate::app::warn_if_out_of_range;

const HELP: &str = "\
commands:
  power <v>   set the exponent (1 to 10, step 0.1)
  noise <v>   set the noise amplitude (0 to 1, step 0.01)
  regen       redraw the noise
  show        print the read-outs
  help        this text
  quit        leave";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Power(f64),
    Noise(f64),
    Regenerate,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("too many arguments to '{}'", head));
    }

    let value = |name: &str| -> Result<f64, String> {
        let raw = arg.ok_or_else(|| format!("'{}' needs a value", name))?;
        raw.parse::<f64>()
            .map_err(|_| format!("'{}' is not a number", raw))
    };
    let bare = |command: Command| match arg {
        Some(_) => Err(format!("'{}' takes no value", head)),
        None => Ok(command),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "power" | "exponent" | "p" => Command::Power(value("power")?),
        "noise" | "n" => Command::Noise(value("noise")?),
        "regen" | "r" => bare(Command::Regenerate)?,
        "show" | "s" => bare(Command::Show)?,
        "help" | "h" | "?" => bare(Command::Help)?,
        "quit" | "exit" | "q" => bare(Command::Quit)?,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

/// Runs until `quit` or end of input.
pub fn run<N, R, W>(state: &mut PlotState<N>, input: R, mut output: W) -> Result<()>
where
    N: NoiseSource,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", state.summary())?;
    writeln!(output, "type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };
        debug!(?command, "Interactive command");

        match command {
            Command::Power(v) => {
                warn_if_out_of_range(&PlotParams {
                    exponent: v,
                    ..*state.params()
                });
                state.set_exponent(v);
            }
            Command::Noise(v) => {
                warn_if_out_of_range(&PlotParams {
                    noise_amplitude: v,
                    ..*state.params()
                });
                state.set_noise_amplitude(v);
            }
            Command::Regenerate => state.regenerate(),
            Command::Show => {}
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(output, "{}", state.summary())?;
    }

    output.flush()?;
    Ok(())
}
