//! slidecast main entry point
//!
//! The viewer's main loop monitors three sources:
//! 1. stdin (keyboard input) - navigation and narration commands
//! 2. Event channels (speech + enhancement) - drained every pass
//! 3. Signals (SIGWINCH for resize) - repaints at the new size
//!
//! The poll timeout is clamped to the narration advance deadline, so
//! auto-advance fires on time even with no input at all.

use log::{debug, error, info};
use mio::{Events, Interest, Poll, Token};
use nix::libc;
use nix::sys::signal::{self, SigHandler, Signal};
use slidecast::display::term::{get_terminal_size, restore_termios, set_raw_mode};
use slidecast::input::{create_default_keymap, DefaultKeyHandler, HandlerAction};
use slidecast::state::config::Config;
use slidecast::state::App;
use slidecast::Result;
use std::io::{self, Read};
use std::os::unix::io::{AsRawFd, RawFd};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Token for stdin in mio poll
const STDIN: Token = Token(0);

/// Global flag set by SIGWINCH handler
static RESIZE_PENDING: AtomicBool = AtomicBool::new(false);

/// SIGWINCH handler - sets flag when terminal is resized
extern "C" fn handle_sigwinch(_: libc::c_int) {
    RESIZE_PENDING.store(true, Ordering::Relaxed);
}

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to slidecast.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("slidecast.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open slidecast.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "slidecast version {} starting (debug mode, logging to slidecast.log)",
            slidecast::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    // Run the application
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("Initializing slidecast");

    // Verify stdin is a TTY; the viewer needs interactive terminal access
    let stdin_fd = io::stdin().as_raw_fd();
    if unsafe { libc::isatty(stdin_fd) } == 0 {
        eprintln!("Error: slidecast requires an interactive terminal (stdin is not a TTY)");
        eprintln!("Usage: Run slidecast directly in a terminal, not through pipes or redirects");
        process::exit(1);
    }

    // Raw mode lets the viewer receive individual keypresses
    let original_termios = set_raw_mode(stdin_fd)?;

    // Ensure we restore terminal on exit
    let _guard = TermiosGuard {
        fd: stdin_fd,
        termios: original_termios,
    };

    // Get current terminal size
    let (cols, rows) = get_terminal_size(stdin_fd)?;
    info!("Terminal size: {}x{}", cols, rows);

    // Load configuration and initialize state
    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let mut app = App::new(config, cols, rows)?;

    // Default key handler for viewer commands
    let keymap = create_default_keymap();
    info!("Key handler initialized with {} bindings", keymap.len());
    let mut default_handler = DefaultKeyHandler::new(keymap);

    // Set up signal handler for window resize
    unsafe {
        signal::signal(Signal::SIGWINCH, SigHandler::Handler(handle_sigwinch)).map_err(|e| {
            slidecast::SlidecastError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to set SIGWINCH handler: {}", e),
            ))
        })?;
    }

    // Set up event loop: we monitor stdin for input
    let poll = Poll::new()?;
    let mut stdin_source = mio::unix::SourceFd(&stdin_fd);
    poll.registry()
        .register(&mut stdin_source, STDIN, Interest::READABLE)?;

    info!("slidecast ready - entering event loop");

    app.display.enter()?;
    let result = event_loop(&mut app, &mut default_handler, poll, stdin_fd);
    if let Err(e) = app.display.leave() {
        debug!("Failed to leave alternate screen: {}", e);
    }
    result
}

fn event_loop(
    app: &mut App,
    default_handler: &mut DefaultKeyHandler,
    mut poll: Poll,
    stdin_fd: RawFd,
) -> Result<()> {
    let mut events = Events::with_capacity(128);

    loop {
        // Check for pending resize
        if RESIZE_PENDING.swap(false, Ordering::Relaxed) {
            let (new_cols, new_rows) = get_terminal_size(stdin_fd)?;
            info!("Terminal resized to {}x{}", new_cols, new_rows);
            app.resize(new_cols, new_rows)?;
        }

        // Drain event channels, fire due advance timers, refresh status
        let now = Instant::now();
        if let Err(e) = app.pump(now) {
            error!("Error pumping events: {}", e);
        }

        // Never sleep past the advance deadline; cap at 100ms so the
        // progress clock and resize flag stay fresh
        let timeout = app
            .time_until_advance(now)
            .map(|d| d.min(Duration::from_millis(100)))
            .or(Some(Duration::from_millis(100)));

        poll.poll(&mut events, timeout)?;

        for event in events.iter() {
            if event.token() == STDIN {
                match handle_stdin(app, default_handler) {
                    Ok(true) => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Ok(false) => {}
                    Err(e) => {
                        // Viewer commands are non-fatal; log and keep going
                        error!("Input error: {}", e);
                    }
                }
            }
        }
    }
}

/// Handle user input from stdin
///
/// Keys go to the top modal handler if one is active (help overlay),
/// otherwise to the default viewer bindings. Returns true to quit.
fn handle_stdin(app: &mut App, default_handler: &mut DefaultKeyHandler) -> Result<bool> {
    let mut buf = [0u8; 64];

    let n = io::stdin().read(&mut buf)?;
    if n == 0 {
        return Ok(false);
    }

    let input = &buf[..n];

    // Modal handlers first (e.g. the help overlay)
    if !app.handlers.is_empty() {
        // Temporarily pop the handler to avoid borrow checker issues
        if let Some(mut handler) = app.handlers.pop() {
            let action = handler.process_with_context(input, app)?;
            match action {
                HandlerAction::Remove => {
                    // Handler removed itself, don't push back
                }
                HandlerAction::Quit => return Ok(true),
                HandlerAction::Handled | HandlerAction::Ignored => {
                    app.handlers.push(handler);
                }
            }
        }
        return Ok(false);
    }

    // No modal handlers - process with the default viewer bindings
    let action = default_handler.process_key(input, app)?;
    Ok(action == HandlerAction::Quit)
}

/// RAII guard to restore terminal on exit
///
/// Ensures the terminal is always returned to normal mode even if the
/// viewer crashes
struct TermiosGuard {
    fd: RawFd,
    termios: libc::termios,
}

impl Drop for TermiosGuard {
    fn drop(&mut self) {
        restore_termios(self.fd, &self.termios);
        debug!("Terminal attributes restored");
    }
}
