/// Position of the student in the input file. Also the secondary sort key
/// of the merit ranking, so students with equal scores rank in input order.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub last_name: String,
    pub first_name: String,
    /// One entry per configured period, in configuration order. `None` when
    /// the student has no recorded grade for that period.
    pub grades: Vec<Option<f64>>,
    /// Wished track names, most preferred first, without duplicates. May be
    /// empty for a student who opted out.
    pub wishes: Vec<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.last_name, self.first_name)
        }
    }
}

/// A student together with the derived merit score.
#[derive(Clone, Debug)]
pub struct ScoredStudent {
    pub student: Student,
    pub score: f64,
}
