use tracing::warn;

use crate::model::Assignments;

/// A cohort larger than the seat count guarantees unassigned students.
pub fn check_seat_count(a: &Assignments) {
    let students = a.students.len();
    let seats = a.total_seats();
    if seats < students {
        warn!("tracks can host {seats} students out of {students}");
    }
}

pub fn report_unassigned(a: &Assignments) {
    for student in a.unassigned_students() {
        warn!(
            "no wished track with a free seat for {}",
            a.student(student).full_name()
        );
    }
}
