//! The seam between effect commands and a concrete presentation layer.
//!
//! The controller emits [`EffectCommand`]s; a `Surface` turns them into
//! style/class mutations. The `web` feature supplies
//! [`DomSurface`](crate::dom::DomSurface) over real elements; tests
//! inject a recording fake and assert on the command stream.

use crate::controller::EffectCommand;

/// Applies effect commands to some presentation medium.
///
/// Implementations must treat commands for elements that do not exist
/// as silent no-ops — absence of one expected element never blocks the
/// other behaviors.
pub trait Surface {
    /// Apply a single command.
    fn apply(&mut self, command: &EffectCommand);

    /// Apply a batch in order. Order matters for `SetActiveNav`
    /// (last write wins over earlier passes).
    fn apply_all(&mut self, commands: &[EffectCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}
