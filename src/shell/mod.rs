//! Line-oriented command interpreter for embedded systems.
//!
//! A [`Cli`] session reads single characters from a caller-supplied input
//! function, edits them into a line and, when the configured terminator
//! arrives, hands the completed line to the registered [`Command`] whose name
//! equals it.
//!
//! # Features
//!
//! - **Zero-allocation**: fixed-size input buffer, caller-owned command entries
//! - **Terminal echo**: typed characters, `BS SP BS` erase and `CR LF` line ends
//! - **Built-in help**: `help` lists every registered command
//! - **Two driving modes**: [`Cli::run`] dispatches automatically,
//!   [`Cli::read_line`] returns lines for custom routing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   get_char()    │───▶│   LineBuffer    │───▶│   Dispatcher    │
//! │   (caller)      │    │   (editing)     │    │   (registry)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │                       │
//!                                 ▼                       ▼
//!                        ┌─────────────────┐    ┌─────────────────┐
//!                        │   Echo          │◀───│   Command       │
//!                        │   send_char()   │    │   handlers      │
//!                        └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Matching
//!
//! The lookup key is the *whole* completed line. `"led"` runs the `led`
//! command, but `"led on"` matches nothing and is ignored. Handlers still get
//! the full line, so a command that takes arguments has to be found with
//! [`Cli::search_command`] and a custom routing step (see
//! [`Cli::read_line`]).
//!
//! Unknown lines are ignored silently: nothing is echoed and no error is
//! returned.
//!
//! # Usage
//!
//! ```rust
//! use libcli::shell::{Cli, Command, Settings};
//!
//! fn uart_read() -> Option<u8> {
//!     None
//! }
//!
//! fn uart_write(_c: u8) {}
//!
//! fn status(cli: &Cli, _input: &str) {
//!     cli.output().send_str("System status: OK\r\n");
//! }
//!
//! let status = Command::new("status", Some("Show system status"), status);
//!
//! let mut cli: Cli = Cli::new(Settings {
//!     get_char: Some(uart_read),
//!     send_char: Some(uart_write),
//!     input_end_char: b'\n',
//!     prompt: Some("> "),
//! })
//! .unwrap();
//! cli.add_command(&status).unwrap();
//!
//! // Returns once uart_read() has no more characters.
//! cli.run();
//! ```

pub mod allocator;
pub mod command;
pub mod config;
pub mod echo;
pub mod error;
pub mod input;


use core::fmt;
use core::str;

pub use allocator::Allocator;
#[cfg(feature = "std")]
pub use allocator::Leak;
pub use command::{Command, CommandFn};
pub use config::{Config, GetCharFn, SendCharFn, Settings};
pub use echo::Echo;
pub use error::Error;
pub use input::{DEFAULT_BUFFER_SIZE, LineBuffer};

/// Name of the built-in help command.
pub const HELP_COMMAND: &str = "help";

/// Description of the built-in help command.
pub const HELP_DESCRIPTION: &str = "print out all the commands";

/// Built-in `help`: one line per entry, followed by a tab-indented
/// description line when the entry has one.
fn help<const N: usize>(cli: &Cli<'_, N>, _input: &str) {
    let out = cli.output();
    for cmd in cli.commands() {
        out.send_str(cmd.name());
        out.end_of_line();
        if let Some(description) = cmd.description() {
            out.send(input::ASCII_TAB);
            out.send_str(description);
            out.end_of_line();
        }
    }
}

/// A command interpreter session.
///
/// Bundles the character callbacks, the line buffer of `N` bytes and the
/// command registry, whose permanent first entry is the built-in `help`.
/// A session is created once and used for the lifetime of the program.
///
/// Sessions are single-threaded: all methods run to completion on the calling
/// thread and only block inside the caller's input function.
pub struct Cli<'a, const N: usize = DEFAULT_BUFFER_SIZE> {
    get_char: GetCharFn,
    echo: Echo,
    input_end_char: u8,
    prompt: Option<&'a str>,
    input: LineBuffer<N>,
    completed: Option<usize>,
    commands: Command<'a, N>,
}

impl<'a, const N: usize> Cli<'a, N> {
    /// Create a session in storage owned by the caller.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingGetChar`] - `settings.get_char` is `None`
    /// * [`Error::MissingSendChar`] - `settings.send_char` is `None`
    pub fn new(settings: Settings<'a>) -> Result<Self, Error> {
        let get_char = settings.get_char.ok_or(Error::MissingGetChar)?;
        let send_char = settings.send_char.ok_or(Error::MissingSendChar)?;

        debug!(
            "cli: buffer {} bytes, terminator {}",
            N,
            settings.input_end_char
        );

        let commands = Command::new(HELP_COMMAND, Some(HELP_DESCRIPTION), help::<N>);
        commands.mark_registered();

        Ok(Self {
            get_char,
            echo: Echo::new(send_char),
            input_end_char: settings.input_end_char,
            prompt: settings.prompt,
            input: LineBuffer::new(),
            completed: None,
            commands,
        })
    }

    /// Create a session in storage provided by `allocator`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingGetChar`] / [`Error::MissingSendChar`] - as for [`Cli::new`]
    /// * [`Error::AllocationFailed`] - the allocator returned no storage
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::shell::{Cli, Settings};
    ///
    /// fn read() -> Option<u8> {
    ///     None
    /// }
    ///
    /// fn write(_c: u8) {}
    ///
    /// let settings = Settings {
    ///     get_char: Some(read),
    ///     send_char: Some(write),
    ///     ..Settings::default()
    /// };
    ///
    /// let mut slot: Option<Cli> = None;
    /// let cli = Cli::with_allocator(settings, &mut slot).unwrap();
    /// assert_eq!(cli.commands().count(), 1);
    /// ```
    pub fn with_allocator<'s, A>(settings: Settings<'a>, allocator: A) -> Result<&'s mut Self, Error>
    where
        A: Allocator<'s, Self>,
    {
        let cli = Self::new(settings)?;
        allocator.allocate(cli).ok_or_else(|| {
            warn!("cli: no storage for session");
            Error::AllocationFailed
        })
    }

    /// Register a command at the end of the registry.
    ///
    /// No duplicate-name check is made: a command with the name of an
    /// earlier entry is unreachable, because lookup returns the first match.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyRegistered`] - `entry` is already linked into this or
    ///   another session's registry; both registries are left unchanged
    pub fn add_command(&mut self, entry: &'a Command<'a, N>) -> Result<(), Error> {
        if entry.is_registered() {
            warn!("cli: command {} already registered", entry.name());
            return Err(Error::AlreadyRegistered);
        }

        entry.link(None);
        entry.mark_registered();
        self.commands.tail().link(Some(entry));
        debug!("cli: registered command {}", entry.name());
        Ok(())
    }

    /// Find the first entry whose name equals `name` exactly.
    ///
    /// The built-in `help` is always checked first.
    pub fn search_command(&self, name: &str) -> Option<&Command<'a, N>> {
        self.commands().find(|cmd| cmd.name() == name)
    }

    /// All registered entries in registry order, starting with `help`.
    pub fn commands(&self) -> impl Iterator<Item = &Command<'a, N>> {
        command::chain(&self.commands)
    }

    /// Run the command whose name equals the whole `line`.
    ///
    /// The handler is called once with the full line. A line that matches no
    /// command is ignored without any output.
    pub fn dispatch(&self, line: &[u8]) {
        let Ok(input) = str::from_utf8(line) else {
            trace!("cli: ignoring non-UTF-8 line of {} bytes", line.len());
            return;
        };

        match self.search_command(input) {
            Some(cmd) => cmd.call(self, input),
            None => trace!("cli: no command matches {}", input),
        }
    }

    /// Feed one character through the line editor.
    ///
    /// Returns the completed line when `c` is the terminator. The line borrows
    /// the session, so it has to be consumed before the next character is fed.
    ///
    /// # Character Handling
    ///
    /// - **Terminator**: completes the line, echoes `CR LF`
    /// - **Backspace**: removes the last character, echoes `BS SP BS`
    /// - **Carriage return**: dropped, unless it is the terminator
    /// - **Anything else**: appended and echoed, or dropped if the buffer is full
    pub fn handle_char(&mut self, c: u8) -> Option<&[u8]> {
        self.feed(c);
        self.last_line()
    }

    /// The line completed by the most recent character, if that character was
    /// the terminator.
    pub fn last_line(&self) -> Option<&[u8]> {
        self.completed.map(|len| self.input.line(len))
    }

    /// Block until a line is completed and return it without dispatching.
    ///
    /// Keeps polling the input function while it has no character, so this
    /// never returns if no terminator arrives. Meant for a dedicated polling
    /// task that routes lines itself:
    ///
    /// ```rust,no_run
    /// use libcli::shell::{Cli, Settings};
    /// # fn read() -> Option<u8> { None }
    /// # fn write(_c: u8) {}
    ///
    /// let mut cli: Cli = Cli::new(Settings {
    ///     get_char: Some(read),
    ///     send_char: Some(write),
    ///     ..Settings::default()
    /// })
    /// .unwrap();
    ///
    /// loop {
    ///     let line = cli.read_line();
    ///     if line.starts_with(b"led ") {
    ///         // custom routing
    ///     } else {
    ///         cli.dispatch(cli.last_line().unwrap_or_default());
    ///     }
    /// }
    /// ```
    pub fn read_line(&mut self) -> &[u8] {
        loop {
            if let Some(c) = (self.get_char)() {
                if let Some(len) = self.feed(c) {
                    return self.input.line(len);
                }
            }
        }
    }

    /// Read characters until the input function returns `None`, dispatching
    /// every completed line and echoing the prompt after it.
    ///
    /// Returns the number of lines completed.
    pub fn run(&mut self) -> usize {
        let mut lines = 0;

        while let Some(c) = (self.get_char)() {
            if let Some(len) = self.feed(c) {
                lines += 1;
                self.dispatch(self.input.line(len));
                self.show_prompt();
            }
        }

        debug!("cli: input exhausted after {} lines", lines);
        lines
    }

    /// Echo the prompt, if one is configured.
    pub fn show_prompt(&self) {
        if let Some(prompt) = self.prompt {
            self.echo.send_str(prompt);
        }
    }

    /// The output sink, for handlers that print.
    pub fn output(&self) -> Echo {
        self.echo
    }

    /// The character that completes a line.
    pub fn input_end_char(&self) -> u8 {
        self.input_end_char
    }

    /// The configured prompt.
    pub fn prompt(&self) -> Option<&'a str> {
        self.prompt
    }

    /// The characters typed so far on the current line.
    pub fn pending(&self) -> &[u8] {
        self.input.pending()
    }

    /// Discard the characters typed so far without echoing anything, for
    /// example when the input source reports a framing error.
    pub fn clear_line(&mut self) {
        trace!("cli: discarding {} pending bytes", self.input.len());
        self.input.clear();
    }

    fn feed(&mut self, c: u8) -> Option<usize> {
        self.completed = self.input.feed(c, self.input_end_char, &self.echo);
        self.completed
    }
}

impl<const N: usize> fmt::Debug for Cli<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("input_end_char", &self.input_end_char)
            .field("prompt", &self.prompt)
            .field("input", &self.input)
            .field("commands", &self.commands().count())
            .finish()
    }
}
