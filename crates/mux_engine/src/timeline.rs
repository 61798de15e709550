//! Global timeline construction.
//!
//! Sorted-unique k-way merge over the per-channel timestamp vectors. The
//! merge is deliberately not a hash-set dedupe: equality is decided by the
//! same f64 comparison the emission pass uses, so no hashing semantics for
//! floats ever enter the picture.

use contracts::ChannelSequence;

/// Compute the ordered, duplicate-free union of all channel timestamps.
///
/// Channels are already strictly increasing (enforced at construction), so a
/// plain k-way merge that skips equal heads yields a strictly increasing
/// union. Empty channels contribute nothing.
pub fn build_timeline<'a, I>(sequences: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a ChannelSequence>,
{
    let sequences: Vec<&ChannelSequence> = sequences.into_iter().collect();
    let upper_bound: usize = sequences.iter().map(|s| s.len()).sum();
    let mut timeline = Vec::with_capacity(upper_bound);
    let mut cursors = vec![0usize; sequences.len()];

    loop {
        let mut next: Option<f64> = None;
        for (seq, &cursor) in sequences.iter().zip(&cursors) {
            if let Some(t) = seq.peek_timestamp(cursor) {
                next = Some(match next {
                    Some(best) if best <= t => best,
                    _ => t,
                });
            }
        }

        let Some(t) = next else {
            break;
        };
        timeline.push(t);

        // Advance every channel whose head equals the merged value, so a
        // timestamp shared across channels lands in the timeline once.
        for (seq, cursor) in sequences.iter().zip(cursors.iter_mut()) {
            if seq.peek_timestamp(*cursor) == Some(t) {
                *cursor += 1;
            }
        }
    }

    timeline
}
