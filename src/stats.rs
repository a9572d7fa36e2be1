use crate::model::Assignments;

/// Histogram of satisfied wishes: entry 0 counts the students assigned to
/// their first wish, entry 1 to their second, and so on. Trailing empty
/// entries are dropped.
pub fn statistics(a: &Assignments) -> Vec<usize> {
    let longest = a
        .all_students()
        .into_iter()
        .map(|student| a.wishes(student).len())
        .max()
        .unwrap_or(0);
    let mut ranks = vec![0; longest];
    for track in a.all_tracks() {
        for &student in a.students_for(track) {
            if let Some(rank) = a.rank_of(student, track) {
                ranks[rank] += 1;
            }
        }
    }
    let latest = ranks.iter().rposition(|&n| n != 0).map_or(0, |n| n + 1);
    ranks.truncate(latest);
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate::allocate;
    use crate::config::TrackConfig;
    use crate::model::{ScoredStudent, Student, StudentId};

    fn scored(id: usize, score: f64, wishes: &[&str]) -> ScoredStudent {
        ScoredStudent {
            student: Student {
                id: StudentId(id),
                last_name: format!("Student {id}"),
                first_name: String::new(),
                grades: Vec::new(),
                wishes: wishes.iter().map(|&w| w.to_owned()).collect(),
            },
            score,
        }
    }

    fn track(name: &str, capacity: i64) -> TrackConfig {
        TrackConfig {
            name: name.to_owned(),
            capacity,
        }
    }

    #[test]
    fn statistics_count_satisfied_wishes() {
        let students = vec![
            scored(0, 18.0, &["X", "Y"]),
            scored(1, 15.0, &["X", "Y"]),
            scored(2, 12.0, &["X"]),
        ];
        let a = allocate(students, &[track("X", 1), track("Y", 1)]).unwrap();
        // 18 gets wish 1, 15 falls back to wish 2, 12 stays out.
        assert_eq!(statistics(&a), vec![1, 1]);
    }

    #[test]
    fn trailing_empty_ranks_are_dropped() {
        let students = vec![
            scored(0, 18.0, &["X", "Y", "Z"]),
            scored(1, 15.0, &["X", "Y", "Z"]),
        ];
        let a = allocate(students, &[track("X", 2), track("Y", 2), track("Z", 2)]).unwrap();
        assert_eq!(statistics(&a), vec![2]);
    }

    #[test]
    fn nobody_assigned_yields_an_empty_histogram() {
        let students = vec![scored(0, 18.0, &[])];
        let a = allocate(students, &[track("X", 1)]).unwrap();
        assert_eq!(statistics(&a), Vec::<usize>::new());
    }
}
