//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, enabling
//! static dispatch with no boxed trait objects. The tool is fully
//! synchronous, so `execute` is a plain function.

mod check;
mod info;
mod version;

pub use check::CheckStrategy;
pub use info::{InfoInput, InfoStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    ///
    /// Each strategy defines its own input type, enabling type-safe
    /// parameter passing without runtime casting or boxing.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
