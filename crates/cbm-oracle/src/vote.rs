use cbm_core::{Case, Label};

/// Majority label among `neighbors`. Ties go to the label seen first, so a
/// nearest-first neighbor list breaks ties toward the closest case.
pub fn majority_vote(neighbors: &[&Case]) -> Option<Label> {
    // Labels in first-seen order with their counts.
    let mut tally: Vec<(Label, usize)> = Vec::new();
    for neighbor in neighbors {
        match tally.iter_mut().find(|(label, _)| *label == neighbor.label()) {
            Some((_, count)) => *count += 1,
            None => tally.push((neighbor.label(), 1)),
        }
    }

    let mut best: Option<(Label, usize)> = None;
    for (label, count) in tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}
