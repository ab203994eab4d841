/// Error indicating that a shape request was invoked with unusable parameters.
///
/// No computation is performed and no span is emitted when a request fails
/// with this error. Its `Display` output is the message meant for the invoker.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// Fewer positional parameters than required were given.
    ///
    /// Displays the usage line of the command.
    #[error("Usage: {command} {synopsis}")]
    MissingParameters {
        /// The name the command was invoked with.
        command: String,
        /// The parameters accepted by the command.
        synopsis: &'static str,
        /// The minimum number of positional parameters.
        required: usize,
        /// The number of positional parameters actually given.
        found: usize,
    },
    /// A numeric parameter is not an integer within the grid coordinate range.
    #[error("{command}: parameter {position} (`{value}`) is not an integer grid coordinate")]
    InvalidNumber {
        /// The name the command was invoked with.
        command: String,
        /// The 1-based position of the faulty parameter.
        position: usize,
        /// The faulty parameter.
        value: String,
    },
    /// A radius parameter is negative or too large.
    #[error("{command}: parameter {position} (`{value}`) is not a radius between 0 and 65535")]
    InvalidRadius {
        /// The name the command was invoked with.
        command: String,
        /// The 1-based position of the faulty parameter.
        position: usize,
        /// The faulty parameter.
        value: String,
    },
    /// The command does not name a known shape.
    #[error("unknown shape command `{command}`, expected `ellipsoid` or `triangle`")]
    UnknownShape {
        /// The name the command was invoked with.
        command: String,
    },
}
