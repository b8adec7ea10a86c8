//! The transform contract shared by the platform patches.

use crate::error::Result;

/// A build-time transform over one native artifact.
///
/// The artifact is taken by value and handed back modified. Implementations
/// must leave it untouched when their configuration disables them.
pub trait NativeTransform {
    /// The artifact this transform edits.
    type Artifact;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn apply(&self, artifact: Self::Artifact) -> Result<Self::Artifact>;
}
