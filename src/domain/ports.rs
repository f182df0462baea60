use crate::domain::model::SequenceToken;

/// Issues recency tokens in place of wall-clock time.
///
/// Every call to `next` must return a token strictly smaller than every
/// token returned before it, for the lifetime of the clock.
pub trait SequenceClock: Send + Sync {
    fn next(&self) -> SequenceToken;
}

impl<C: SequenceClock + ?Sized> SequenceClock for std::sync::Arc<C> {
    fn next(&self) -> SequenceToken {
        (**self).next()
    }
}
