//! Error types for shell operations

/// An error reported by the shell.
///
/// Only session setup and registration can fail. Editing and dispatch never
/// do: a full buffer drops characters and an unknown command is ignored.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The settings carry no character-input function.
    MissingGetChar,
    /// The settings carry no character-output function.
    MissingSendChar,
    /// The allocator could not provide storage for the session.
    AllocationFailed,
    /// The command entry is already linked into a session's registry.
    AlreadyRegistered,
    /// A configuration document could not be parsed or serialized.
    InvalidConfig,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MissingGetChar => defmt::write!(f, "MissingGetChar"),
            Error::MissingSendChar => defmt::write!(f, "MissingSendChar"),
            Error::AllocationFailed => defmt::write!(f, "AllocationFailed"),
            Error::AlreadyRegistered => defmt::write!(f, "AlreadyRegistered"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
        }
    }
}
