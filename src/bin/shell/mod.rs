// Interactive playback shell: solve ladders over a preloaded word list
// and step or replay the recorded BFS frames.
// Commands: solve, show, next, prev, goto, play, paths, help, exit/quit

use rustyline::{error::ReadlineError, Editor};
use std::cell::RefCell;
use std::rc::Rc;

use ctrlc;
use rungs::{normalize_input, solve, Frame, Solution, SolveStatus};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    mpsc::{channel, Receiver},
    Arc,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Help text for interactive shell commands and Ctrl-C behavior.
const HELP_TEXT: &str = "\
Available commands:
  solve <begin> <end>   run the solver over the loaded word list
  show                  print the current frame
  next, prev            step one frame forward / back
  goto <k>              jump to frame k (0-based)
  play [ms]             replay all frames with a delay per frame
  paths                 print every shortest path of the last solve
  help                  show this help
  exit, quit            exit the shell

Ctrl-C once aborts a running play; twice within 2s exits the shell
";

struct ShellState {
    dict_text: String,
    delay_ms: u64,
    solution: Option<Solution>,
    cursor: usize,
}

fn print_frame(frame: &Frame, total: usize) {
    println!("frame {}/{} (level {})", frame.level + 1, total, frame.level);
    println!("  frontier:   {}", frame.frontier.join(" "));
    if frame.next.is_empty() {
        println!("  discovered: (none)");
    } else {
        println!("  discovered: {}", frame.next.join(" "));
    }
    println!("  visited:    {} word(s)", frame.visited.len());
    if frame.found {
        println!("  end word reached");
    }
}

/// Replay frames from the start with a per-frame delay, abortable via Ctrl-C.
fn play_frames(frames: &[Frame], delay: Duration, abort_rx: Option<&Receiver<()>>) {
    for frame in frames {
        if let Some(rx) = abort_rx {
            if rx.try_recv().is_ok() {
                println!("\nPlayback aborted");
                return;
            }
        }
        print_frame(frame, frames.len());
        std::thread::sleep(delay);
    }
}

/// Internal helper to process one shell command; returns true to exit shell
fn handle_cmd(
    state: &Rc<RefCell<ShellState>>,
    abort_rx: Option<&Receiver<()>>,
    raw: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(false);
    }
    let mut parts = line.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(false),
    };
    match cmd {
        "solve" => {
            let begin = parts.next();
            let end = parts.next();
            let (begin, end) = match (begin, end) {
                (Some(b), Some(e)) => (b, e),
                _ => {
                    println!("Usage: solve <begin> <end>");
                    return Ok(false);
                }
            };
            let (solution, words) = {
                let state_ref = state.borrow();
                let norm = normalize_input(begin, end, &state_ref.dict_text);
                (solve(&norm.begin, &norm.end, &norm.words), norm.words.len())
            };
            match solution.status {
                SolveStatus::Found => println!(
                    "found {} shortest path(s) in {} frame(s) over {} word(s)",
                    solution.paths.len(),
                    solution.frames.len(),
                    words
                ),
                SolveStatus::NoPath => println!(
                    "no ladder found ({} frame(s) over {} word(s))",
                    solution.frames.len(),
                    words
                ),
                SolveStatus::LengthMismatch => {
                    println!("begin and end words differ in length; no frames")
                }
            }
            let mut state_ref = state.borrow_mut();
            state_ref.solution = Some(solution);
            state_ref.cursor = 0;
        }
        "show" => {
            let state_ref = state.borrow();
            match &state_ref.solution {
                Some(sol) if !sol.frames.is_empty() => {
                    print_frame(&sol.frames[state_ref.cursor], sol.frames.len());
                }
                Some(_) => println!("No frames to show"),
                None => println!("Nothing solved yet; run: solve <begin> <end>"),
            }
        }
        "next" | "prev" => {
            let mut state_ref = state.borrow_mut();
            let total = state_ref
                .solution
                .as_ref()
                .map(|s| s.frames.len())
                .unwrap_or(0);
            if total == 0 {
                println!("No frames to step through");
                return Ok(false);
            }
            if cmd == "next" && state_ref.cursor + 1 < total {
                state_ref.cursor += 1;
            } else if cmd == "prev" && state_ref.cursor > 0 {
                state_ref.cursor -= 1;
            }
            let cursor = state_ref.cursor;
            if let Some(sol) = &state_ref.solution {
                print_frame(&sol.frames[cursor], total);
            }
        }
        "goto" => {
            let k: usize = match parts.next().and_then(|t| t.parse().ok()) {
                Some(k) => k,
                None => {
                    println!("Usage: goto <frame index>");
                    return Ok(false);
                }
            };
            let mut state_ref = state.borrow_mut();
            let total = state_ref
                .solution
                .as_ref()
                .map(|s| s.frames.len())
                .unwrap_or(0);
            if k >= total {
                println!("Frame index out of range (0..{})", total.saturating_sub(1));
                return Ok(false);
            }
            state_ref.cursor = k;
            if let Some(sol) = &state_ref.solution {
                print_frame(&sol.frames[k], total);
            }
        }
        "play" => {
            let delay_ms = parts
                .next()
                .and_then(|t| t.parse().ok())
                .unwrap_or(state.borrow().delay_ms);
            let state_ref = state.borrow();
            match &state_ref.solution {
                Some(sol) if !sol.frames.is_empty() => {
                    play_frames(&sol.frames, Duration::from_millis(delay_ms), abort_rx);
                }
                Some(_) => println!("No frames to play"),
                None => println!("Nothing solved yet; run: solve <begin> <end>"),
            }
        }
        "paths" => {
            let state_ref = state.borrow();
            match &state_ref.solution {
                Some(sol) if !sol.paths.is_empty() => {
                    for path in &sol.paths {
                        println!("{}", path.join(" -> "));
                    }
                    println!("{} path(s)", sol.paths.len());
                }
                Some(_) => println!("No paths"),
                None => println!("Nothing solved yet; run: solve <begin> <end>"),
            }
        }
        "help" => println!("{}", HELP_TEXT),
        "exit" | "quit" => return Ok(true),
        other => println!("Unknown command: {} (try 'help')", other),
    }
    Ok(false)
}

pub fn run_shell(dict_text: String, delay_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let word_count = dict_text.split_whitespace().count();
    let state = Rc::new(RefCell::new(ShellState {
        dict_text,
        delay_ms,
        solution: None,
        cursor: 0,
    }));

    let mut rl = Editor::<()>::new()?;
    // Setup Ctrl-C handler: first press aborts playback, second within 2s exits shell
    let (sig_tx, sig_rx) = channel::<()>();
    let last_sig = Arc::new(AtomicU64::new(0));
    {
        let sig_tx = sig_tx.clone();
        let last_sig = Arc::clone(&last_sig);
        ctrlc::set_handler(move || {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64;
            let prev = last_sig.swap(now, Ordering::SeqCst);
            if now.saturating_sub(prev) < 2000 {
                std::process::exit(0);
            }
            let _ = sig_tx.send(());
        })?;
    }

    println!("Word list contains {} token(s)", word_count);
    println!("{}", HELP_TEXT);

    loop {
        match rl.readline("rungs> ") {
            Ok(line) => {
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                rl.add_history_entry(raw);

                if handle_cmd(&state, Some(&sig_rx), raw)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Handle double Ctrl-C at prompt: exit if within 2s
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis() as u64;
                let prev = last_sig.swap(now, Ordering::SeqCst);
                if now.saturating_sub(prev) < 2000 {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
