//! Results of a single field read.

/// What ended a completed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminator {
    /// The field delimiter; more fields follow in the same record.
    Delimiter,
    /// A record terminator (CR, LF, or a CR/LF pair in either order).
    RecordEnd,
    /// End of the byte stream.
    StreamEnd,
}

impl Terminator {
    /// Whether this terminator also ends the current record.
    ///
    /// True for [`RecordEnd`](Terminator::RecordEnd) and
    /// [`StreamEnd`](Terminator::StreamEnd).
    #[must_use]
    pub fn is_record_boundary(self) -> bool {
        matches!(self, Terminator::RecordEnd | Terminator::StreamEnd)
    }
}

/// How a [`read_field`](crate::FieldScanner::read_field) call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldOutcome {
    /// The buffer filled before the field ended. The rest of the field is
    /// still in the source; the next call continues it.
    Truncated,
    /// The field ended, and this is what ended it.
    Complete(Terminator),
}

/// Result of one [`read_field`](crate::FieldScanner::read_field) call.
///
/// A field that exactly fills the buffer and then ends is `Complete` with
/// `written` equal to the buffer length; [`Truncated`](FieldOutcome::Truncated)
/// is reported only when a content byte did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRead {
    /// Bytes of field content placed in the caller's buffer by this call.
    pub written: usize,
    /// Whether the field completed, and on what.
    pub outcome: FieldOutcome,
}

impl FieldRead {
    /// Whether the buffer filled before the field ended.
    #[must_use]
    pub fn is_truncated(self) -> bool {
        matches!(self.outcome, FieldOutcome::Truncated)
    }

    /// The terminator, if the field completed.
    #[must_use]
    pub fn terminator(self) -> Option<Terminator> {
        match self.outcome {
            FieldOutcome::Complete(terminator) => Some(terminator),
            FieldOutcome::Truncated => None,
        }
    }
}
