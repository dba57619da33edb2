use super::difference::{DiffScript, Difference};

/// Coalesce consecutive segments of the same kind
///
/// Content is appended in order, so both reconstructed texts are unchanged. Segments
/// without content are dropped along the way.
pub fn merge(script: DiffScript) -> DiffScript {
    let mut merged: Vec<Difference> = Vec::with_capacity(script.len());

    for difference in script.into_iter().filter(|difference| !difference.is_empty()) {
        match merged.last_mut() {
            Some(previous) if previous.kind() == difference.kind() => {
                previous.push_str(difference.content())
            }
            _ => merged.push(difference),
        }
    }

    merged.into()
}
