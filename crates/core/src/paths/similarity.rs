//! Rightmost-segment similarity between paths

use std::cmp::Ordering;
use std::path::PathBuf;

/// Number of segments two paths share counting from the file name upwards.
///
/// Stops at the first mismatch, so `["app", "models", "user"]` and
/// `["models", "user"]` score 2 while `["admin", "user"]` scores 1.
pub fn score<A, B>(candidate: &[A], target: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    candidate
        .iter()
        .rev()
        .zip(target.iter().rev())
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count()
}

/// A file that could correspond to the path being resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub score: usize,
}

impl Candidate {
    fn depth(&self) -> usize {
        self.path.components().count()
    }

    /// Best first: higher score, then shallower, then shorter, then by name
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.depth().cmp(&other.depth()))
            .then_with(|| self.path.as_os_str().len().cmp(&other.path.as_os_str().len()))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Score every candidate against `target`, keeping those whose file name
/// matches, ordered best first.
pub fn rank<I>(target: &[String], candidates: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = (PathBuf, Vec<String>)>,
{
    let mut ranked: Vec<Candidate> = candidates
        .into_iter()
        .filter_map(|(path, segments)| {
            let score = score(&segments, target);
            (score > 0).then_some(Candidate { path, score })
        })
        .collect();

    ranked.sort_by(Candidate::rank);
    ranked
}

pub fn best_match<I>(target: &[String], candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = (PathBuf, Vec<String>)>,
{
    rank(target, candidates).into_iter().next()
}
