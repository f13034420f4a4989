/// Keep the candidates whose text contains `query`, ignoring case.
///
/// Order is preserved and nothing is ranked; an empty query keeps everything.
pub fn filter_candidates<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();
    candidates
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| c.to_lowercase().contains(&query_lower))
        .collect()
}
