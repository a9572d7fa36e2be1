use tracing::{debug, instrument};

use crate::config::{Period, TrackConfig};
use crate::error::{ConfigError, SolveError};
use crate::model::{Assignments, ScoredStudent, Student};
use crate::scoring;

/// Single greedy pass in merit order: every student gets the first track of
/// their wish list with a free seat. A student whose wishes are all full
/// (or who wished nothing) stays unassigned, which is a valid outcome, not
/// an error.
#[instrument(skip_all)]
pub fn allocate(
    students: Vec<ScoredStudent>,
    tracks: &[TrackConfig],
) -> Result<Assignments, ConfigError> {
    let mut assignments = Assignments::new(students, tracks)?;
    for student in assignments.ranking() {
        let seat = assignments
            .wishes(student)
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, track)| !assignments.is_full(track));
        match seat {
            Some((rank, track)) => {
                debug!(
                    "assigning {} to {} (wish {})",
                    assignments.student(student).full_name(),
                    assignments.track(track).name,
                    rank + 1
                );
                assignments.assign_to(student, track);
            }
            None => debug!(
                "no wished track with a free seat for {}",
                assignments.student(student).full_name()
            ),
        }
    }
    Ok(assignments)
}

/// The whole pipeline: score every student, then allocate seats in merit
/// order. This is the only entry point `main` needs.
pub fn solve(
    students: Vec<Student>,
    periods: &[Period],
    tracks: &[TrackConfig],
) -> Result<Assignments, SolveError> {
    let scored = scoring::score_students(students, periods)?;
    Ok(allocate(scored, tracks)?)
}
