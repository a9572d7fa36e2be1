pub use self::assignments::Assignments;
pub use self::student::{ScoredStudent, Student, StudentId};
pub use self::track::{Track, TrackId};

mod assignments;
mod student;
mod track;
