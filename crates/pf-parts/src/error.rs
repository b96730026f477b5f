use crate::part::{PartId, PartKind};
use thiserror::Error;

pub type PartResult<T> = Result<T, PartError>;

/// Part-model and catalog errors.
///
/// These are configuration errors: a layout referencing an unregistered
/// part kind, or a part whose settings belong to a different kind, is a
/// caller bug and is surfaced immediately rather than worked around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartError {
    #[error("no specification registered for part kind {kind:?} (part '{id}')")]
    UnknownKind { id: PartId, kind: PartKind },

    #[error("part '{id}' ({kind:?}) carries {found} settings")]
    SettingsMismatch {
        id: PartId,
        kind: PartKind,
        found: &'static str,
    },
}
