//! Command entries and the registry chain.
//!
//! The registry is an intrusive singly-linked list: each [`Command`] carries
//! the link to the entry registered after it. Entries are owned by the caller
//! and only borrowed by the session, so registering a command never
//! allocates.

use core::cell::Cell;
use core::fmt;

use super::Cli;
use super::input::DEFAULT_BUFFER_SIZE;

/// Function signature for command handlers.
///
/// Handlers receive the session that dispatched them and the complete input
/// line, exactly as typed. No argument splitting is done; a handler that
/// wants arguments parses them out of the line itself.
///
/// # Examples
///
/// ```rust
/// use libcli::shell::CommandFn;
///
/// let reboot: CommandFn<32> = |cli, _input| {
///     cli.output().send_str("rebooting\r\n");
/// };
/// # let _ = reboot;
/// ```
pub type CommandFn<const N: usize> = fn(cli: &Cli<'_, N>, input: &str);

/// A named, handler-bound entry of the command registry.
///
/// Create entries with [`Command::new`] and link them into a session with
/// [`Cli::add_command`](super::Cli::add_command). An entry must outlive the
/// session it is registered with, which the borrow checker enforces.
///
/// An entry belongs to at most one session: once registered it can not be
/// added again, to the same session or to another one.
///
/// Entries hold their link in a [`Cell`], so they are not `Sync` and a
/// registry can only be used from one thread.
///
/// # Examples
///
/// ```rust
/// use libcli::shell::{Cli, Command};
///
/// fn status(cli: &Cli, _input: &str) {
///     cli.output().send_str("OK\r\n");
/// }
///
/// let status = Command::new("status", Some("Show device status"), status);
/// assert_eq!(status.name(), "status");
/// assert_eq!(status.description(), Some("Show device status"));
/// ```
pub struct Command<'a, const N: usize = DEFAULT_BUFFER_SIZE> {
    name: &'a str,
    description: Option<&'a str>,
    handler: CommandFn<N>,
    next: Cell<Option<&'a Command<'a, N>>>,
    registered: Cell<bool>,
}

impl<'a, const N: usize> Command<'a, N> {
    /// Create an unlinked entry.
    ///
    /// Names are matched case-sensitively against the whole input line.
    pub const fn new(name: &'a str, description: Option<&'a str>, handler: CommandFn<N>) -> Self {
        Self {
            name,
            description,
            handler,
            next: Cell::new(None),
            registered: Cell::new(false),
        }
    }

    /// The command name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The human-readable description, if any.
    pub fn description(&self) -> Option<&'a str> {
        self.description
    }

    /// The entry registered after this one.
    pub fn next(&self) -> Option<&'a Command<'a, N>> {
        self.next.get()
    }

    /// Whether the entry has been linked into a session's registry.
    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    /// Invoke the handler.
    pub fn call(&self, cli: &Cli<'_, N>, input: &str) {
        (self.handler)(cli, input);
    }

    pub(crate) fn link(&self, next: Option<&'a Command<'a, N>>) {
        self.next.set(next);
    }

    pub(crate) fn mark_registered(&self) {
        self.registered.set(true);
    }

    /// The last entry of the chain starting at `self`.
    pub(crate) fn tail(&self) -> &Command<'a, N> {
        let mut tail = self;
        while let Some(next) = tail.next() {
            tail = next;
        }
        tail
    }
}

/// Iterate over the chain starting at `head`, in link order.
pub(crate) fn chain<'c, 'a, const N: usize>(
    head: &'c Command<'a, N>,
) -> impl Iterator<Item = &'c Command<'a, N>> {
    core::iter::successors(Some(head), |cmd| cmd.next().map(|next| next as &'c Command<'a, N>))
}

impl<const N: usize> fmt::Debug for Command<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("next", &self.next().map(|next| next.name))
            .field("registered", &self.is_registered())
            .finish()
    }
}
