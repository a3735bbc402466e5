/// Token attached to an in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seq(u64);

/// Monotonic request counter for one feature.
///
/// A completion is applied only while its token is still the latest issued; anything
/// issued before the latest [`issue`](Self::issue) or [`invalidate`](Self::invalidate)
/// is stale.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Seq {
        self.latest += 1;
        Seq(self.latest)
    }

    /// Make every outstanding token stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, seq: Seq) -> bool {
        seq.0 == self.latest
    }
}
