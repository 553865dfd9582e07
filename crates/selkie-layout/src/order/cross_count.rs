/// Number of pairs `j < i` where both references are present and `refs[i] < refs[j]`.
///
/// `None` marks a step whose neighbour is absent from the reference order; such entries never
/// take part in an inversion.
pub fn crossing_score(refs: &[Option<usize>]) -> usize {
    let mut score = 0;
    for (i, ri) in refs.iter().enumerate() {
        let Some(ri) = ri else {
            continue;
        };
        score += refs[..i]
            .iter()
            .filter(|rj| matches!(rj, Some(rj) if ri < rj))
            .count();
    }
    score
}
