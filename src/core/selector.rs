use std::cmp::Ordering;

use super::axes::AxisVector;
use super::component::{Compatibility, Component};
use super::scoring::affinity_score;

/// An eligible component with its ranking keys.
///
/// `major_conflicts` and `minor_tensions` are tie-breakers reserved for
/// per-component conflict estimates; selection fills both with zero.
#[derive(Debug, Clone)]
pub struct ScoredComponent<'a, D> {
    pub component: &'a Component<D>,
    pub score: f64,
    pub major_conflicts: u32,
    pub minor_tensions: u32,
}

impl<D> ScoredComponent<'_, D> {
    /// Best first: score descending, then fewer conflicts, fewer tensions,
    /// then ascending id.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.major_conflicts.cmp(&other.major_conflicts))
            .then_with(|| self.minor_tensions.cmp(&other.minor_tensions))
            .then_with(|| self.component.id.cmp(&other.component.id))
    }
}

/// No prohibited literal may appear anywhere in the vector, and every
/// required literal must appear somewhere in it.
pub fn is_eligible(compatibility: &Compatibility, vector: &AxisVector) -> bool {
    !compatibility
        .prohibited_tags
        .iter()
        .any(|tag| vector.matches_tag(tag))
        && compatibility
            .required_tags
            .iter()
            .all(|tag| vector.matches_tag(tag))
}

/// Every eligible component, best first.
pub fn rank<'a, D>(library: &'a [Component<D>], vector: &AxisVector) -> Vec<ScoredComponent<'a, D>> {
    let mut scored: Vec<ScoredComponent<'a, D>> = library
        .iter()
        .filter(|c| is_eligible(&c.compatibility, vector))
        .map(|component| ScoredComponent {
            component,
            score: affinity_score(component, vector),
            major_conflicts: 0,
            minor_tensions: 0,
        })
        .collect();
    scored.sort_by(ScoredComponent::rank);
    scored
}

/// Picks the single best component, or `None` when nothing is eligible.
pub fn select<'a, D>(library: &'a [Component<D>], vector: &AxisVector) -> Option<&'a Component<D>> {
    let ranked = rank(library, vector);
    let best = ranked.first()?;
    tracing::debug!(
        section = %best.component.section,
        id = %best.component.id,
        score = best.score,
        eligible = ranked.len(),
        "selected component"
    );
    Some(best.component)
}
