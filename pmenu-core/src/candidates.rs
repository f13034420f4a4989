use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CandidatesError {
    #[error("no lines given")]
    NoArguments,
    #[error("all given lines are empty")]
    AllEmpty,
}

/// Turn process arguments (program name excluded) into candidate lines.
///
/// A single argument is split on line breaks, several arguments are one
/// candidate each. Empty lines are dropped.
pub fn candidates_from_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, CandidatesError> {
    let lines: Vec<String> = match args {
        [] => return Err(CandidatesError::NoArguments),
        [single] => single.as_ref().lines().map(str::to_string).collect(),
        many => many.iter().map(|s| s.as_ref().to_string()).collect(),
    };

    let lines: Vec<String> = lines.into_iter().filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Err(CandidatesError::AllEmpty);
    }
    Ok(lines)
}
