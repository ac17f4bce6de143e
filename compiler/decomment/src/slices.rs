//! Pairing segments with their source text.

use decomment_core::Segment;

/// Yield each segment with its starting byte offset and source text.
pub(crate) fn segment_slices<'s>(
    source: &'s str,
    segments: &'s [Segment],
) -> impl Iterator<Item = (usize, Segment, &'s str)> + 's {
    segments.iter().scan(0usize, move |pos, &segment| {
        let start = *pos;
        *pos += segment.len as usize;
        // Every delimiter is ASCII, so segment boundaries are char boundaries.
        Some((start, segment, source.get(start..*pos).unwrap_or("")))
    })
}
