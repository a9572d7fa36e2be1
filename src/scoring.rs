use tracing::trace;

use crate::config::Period;
use crate::error::DataError;
use crate::model::{ScoredStudent, Student};

/// Weighted average of the student's recorded grades. A period without a
/// recorded grade is excluded from both the numerator and the denominator,
/// so the average rescales over the periods the student actually has
/// instead of counting them as zero.
pub fn merit_score(student: &Student, periods: &[Period]) -> Result<f64, DataError> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (period, grade) in periods.iter().zip(&student.grades) {
        if let Some(grade) = grade {
            weighted_sum += grade * period.weight;
            total_weight += period.weight;
        }
    }
    if total_weight == 0.0 {
        return Err(DataError::UnscorableStudent {
            student: student.full_name(),
        });
    }
    Ok(weighted_sum / total_weight)
}

/// Score every student, keeping input order. The first unscorable student
/// aborts the whole batch.
pub fn score_students(
    students: Vec<Student>,
    periods: &[Period],
) -> Result<Vec<ScoredStudent>, DataError> {
    students
        .into_iter()
        .map(|student| {
            let score = merit_score(&student, periods)?;
            trace!("merit score of {}: {}", student.full_name(), score);
            Ok(ScoredStudent { student, score })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;

    fn period(name: &str, weight: f64) -> Period {
        Period {
            name: name.to_owned(),
            weight,
        }
    }

    fn student(name: &str, grades: &[Option<f64>]) -> Student {
        Student {
            id: StudentId(0),
            last_name: name.to_owned(),
            first_name: String::new(),
            grades: grades.to_vec(),
            wishes: Vec::new(),
        }
    }

    #[test]
    fn weighted_average_follows_the_period_weights() {
        let periods = [
            period("S5", 1.0),
            period("S6", 1.0),
            period("S7", 2.0),
            period("S8", 2.0),
        ];
        let student = student("A", &[Some(10.0), Some(12.0), Some(14.0), Some(16.0)]);
        let score = merit_score(&student, &periods).unwrap();
        // (10 + 12 + 2*14 + 2*16) / 6
        assert!((score - 82.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn missing_periods_rescale_the_average() {
        let periods = [period("P1", 1.0), period("P2", 1.0), period("P3", 1.0)];
        let student = student("A", &[Some(14.0), None, Some(10.0)]);
        assert_eq!(merit_score(&student, &periods).unwrap(), 12.0);
    }

    #[test]
    fn student_without_any_grade_is_unscorable() {
        let periods = [period("P1", 1.0), period("P2", 1.0)];
        let student = student("Doe", &[None, None]);
        assert_eq!(
            merit_score(&student, &periods).unwrap_err(),
            DataError::UnscorableStudent {
                student: "Doe".to_owned(),
            }
        );
    }

    #[test]
    fn grades_only_in_zero_weight_periods_are_unscorable() {
        let periods = [period("P1", 0.0), period("P2", 1.0)];
        let student = student("Doe", &[Some(15.0), None]);
        assert!(merit_score(&student, &periods).is_err());
    }

    #[test]
    fn all_zero_grades_score_zero() {
        // A real average of zero is a score, not a data error.
        let periods = [period("P1", 1.0), period("P2", 2.0)];
        let student = student("A", &[Some(0.0), Some(0.0)]);
        assert_eq!(merit_score(&student, &periods).unwrap(), 0.0);
    }

    #[test]
    fn batch_scoring_keeps_input_order_and_reports_the_offender() {
        let periods = [period("P1", 1.0)];
        let students = vec![
            student("A", &[Some(11.0)]),
            student("B", &[Some(17.0)]),
            student("C", &[Some(8.0)]),
        ];
        let scored = score_students(students, &periods).unwrap();
        assert_eq!(
            scored
                .iter()
                .map(|s| s.student.last_name.as_str())
                .collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(scored[1].score, 17.0);

        let students = vec![student("A", &[Some(11.0)]), student("Martin", &[None])];
        assert_eq!(
            score_students(students, &periods).unwrap_err(),
            DataError::UnscorableStudent {
                student: "Martin".to_owned(),
            }
        );
    }
}
