// SPDX-License-Identifier: MIT
//
// kilo — a minimal full-screen terminal text editor.
//
// This is the main binary that wires the two crates together:
//
//   kilo-term   → raw mode, window size, key decoding, frame output
//   kilo-editor → document, cursor, frame composition, key handling
//
// Startup order matters: raw mode first (the geometry probe reads the
// terminal's reply from stdin, which must not be line-buffered or echoed),
// then window size, then the file. After that the loop is:
//
//   refresh → one frame, one write
//   read    → one key, retrying on the 100 ms read timeout
//   apply   → move the cursor, or quit on Ctrl+Q
//
// Any error is fatal and goes through `terminal::die`, which clears the
// screen, restores the terminal and exits with status 1.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kilo_editor::document::Document;
use kilo_editor::editor::{Action, Editor, clear_screen_on_exit};

use kilo_term::geometry;
use kilo_term::input::KeyReader;
use kilo_term::terminal::{self, RawMode};
use kilo_term::tty::{TtyReader, TtyWriter};

// ─── Command line ───────────────────────────────────────────────────────────

/// A minimal full-screen terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "kilo", version, about)]
struct Args {
    /// File to open. Without one the editor starts with an empty document.
    file: Option<PathBuf>,

    /// Anything after the file is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Off unless `RUST_LOG` asks for it: stderr is the same terminal the
/// editor draws on, so redirect it (`2>kilo.log`) when turning logs on.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
}

// ─── Main loop ──────────────────────────────────────────────────────────────

fn run(args: &Args) -> kilo_editor::Result<()> {
    let raw = RawMode::enable()?;

    let mut out = TtyWriter;
    let mut keys = KeyReader::new(TtyReader);
    let size = geometry::window_size(&mut TtyReader, &mut out)?;

    let document = match &args.file {
        Some(path) => Document::open(path)?,
        None => Document::new(),
    };
    let mut editor = Editor::new(size, document);

    loop {
        editor.refresh(&mut out)?;
        let key = keys.read_key()?;
        if editor.apply(key) == Action::Quit {
            break;
        }
    }

    clear_screen_on_exit(&mut out)?;
    raw.disable()?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => terminal::die(e),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
