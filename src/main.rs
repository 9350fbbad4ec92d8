// SPDX-License-Identifier: MIT
//
// colorable — walk the named-color catalog from the command line.
//
// A thin driver over the two library crates:
//
//   colorable-convert → names, RGB, HSB, hex
//   colorable-set     → sorted, circular colorsets with a cursor
//
// Usage:
//
//   colorable [ORDER] [DIRECTION] [STEPS]
//
//   ORDER      name | rgb | red | green | blue | hsb | hsv | hue | sat | bright
//   DIRECTION  + | -
//   STEPS      how many colors to print (negative walks backward)
//
// Each printed line is a truecolor swatch followed by the color's name, hex,
// and the representation picked by the order's mode. `RUST_LOG=debug` shows
// colorset construction; `RUST_LOG=trace` shows every cursor move.

use std::env;
use std::process;

use colorable_convert::Rgb;
use colorable_set::{Color, Colorset, ColorsetConfig, ColorsetError, Mode, Order};
use thiserror::Error;

/// Parsed command line.
#[derive(Debug)]
struct Args {
    config: ColorsetConfig,
    steps: isize,
}

const DEFAULT_STEPS: isize = 5;

const USAGE: &str = "usage: colorable [ORDER] [DIRECTION] [STEPS]";

/// What the command line asks for.
#[derive(Debug)]
enum Command {
    Help,
    Walk(Args),
}

/// Errors the command line can produce, beyond bad colorset options.
#[derive(Debug, Error)]
enum ArgError {
    #[error(transparent)]
    Colorset(#[from] ColorsetError),

    #[error("'{0}' is not a step count")]
    Steps(String),

    #[error("unexpected argument '{0}'")]
    Extra(String),
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, ArgError> {
    let mut args = args.into_iter();
    let order = args.next().unwrap_or_else(|| "name".to_owned());
    if order == "-h" || order == "--help" {
        return Ok(Command::Help);
    }
    let direction = args.next().unwrap_or_else(|| "+".to_owned());
    let steps = match args.next() {
        Some(s) => s.parse().map_err(|_| ArgError::Steps(s))?,
        None => DEFAULT_STEPS,
    };
    if let Some(extra) = args.next() {
        return Err(ArgError::Extra(extra));
    }
    Ok(Command::Walk(Args {
        config: ColorsetConfig::parse(&order, &direction)?,
        steps,
    }))
}

/// One output line: swatch, name, hex, and the mode's own rendering.
fn swatch_line(color: &Color) -> String {
    let Rgb { r, g, b } = color.rgb();
    let shown = if color.mode() == Mode::Name {
        String::new()
    } else {
        format!("  {color}")
    };
    format!(
        "\x1b[48;2;{r};{g};{b}m      \x1b[0m  {:<22} {}{shown}",
        color.name(),
        color.hex()
    )
}

/// Print the starting color plus `steps` more, moving in the sign's direction.
fn run(args: Args) -> Result<(), ColorsetError> {
    let mut set = Colorset::new(args.config)?;
    println!("{set}");
    println!("{}", swatch_line(set.current()));

    let dir = args.steps.signum();
    for _ in 0..args.steps.unsigned_abs() {
        println!("{}", swatch_line(set.advance(dir)));
    }
    log::debug!("finished at {}/{}", set.position(), set.len());
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Walk(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            println!("orders: {}", Order::NAMES.join(", "));
            return;
        }
        Err(e) => {
            eprintln!("colorable: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("colorable: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
