use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use eyre::{Result, WrapErr, ensure};
use tracing::{instrument, warn};

use crate::config::Period;
use crate::model::{Assignments, Student, StudentId};

/// Byte order mark Excel expects at the start of UTF-8 CSV files.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Columns before the first grade: last name, first name.
const IDENTITY_COLUMNS: usize = 2;

/// Load the students file: semicolon-delimited, one header row, then one
/// row per student with the identity columns, one grade column per
/// configured period and the wished tracks in preference order in the
/// remaining columns.
#[instrument(skip(periods))]
pub fn load_students(path: &Path, periods: &[Period]) -> Result<Vec<Student>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open students file {}", path.display()))?;
    read_students(file, periods)
        .with_context(|| format!("cannot load students from {}", path.display()))
}

pub fn read_students<R: Read>(reader: R, periods: &[Period]) -> Result<Vec<Student>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut students: Vec<Student> = Vec::new();
    for (index, record) in csv.records().enumerate() {
        let row = index + 1;
        let record = record.with_context(|| format!("student row {row} is not valid CSV"))?;
        ensure!(
            record.len() >= IDENTITY_COLUMNS + periods.len(),
            "student row {row} has {} columns, expected at least {}",
            record.len(),
            IDENTITY_COLUMNS + periods.len()
        );
        let last_name = record[0].trim();
        let first_name = record[1].trim();
        ensure!(!last_name.is_empty(), "student row {row} has an empty name");
        let grades = (0..periods.len())
            .map(|period| {
                parse_grade(&record[IDENTITY_COLUMNS + period]).with_context(|| {
                    format!(
                        "student row {row}: invalid grade for period {}",
                        periods[period].name
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let mut wishes: Vec<String> = Vec::new();
        for wish in record.iter().skip(IDENTITY_COLUMNS + periods.len()) {
            let wish = wish.trim();
            if wish.is_empty() {
                continue;
            }
            if wishes.iter().any(|w| w == wish) {
                warn!("student row {row} ({last_name} {first_name}): ignoring repeated wish {wish:?}");
                continue;
            }
            wishes.push(wish.to_owned());
        }
        if students
            .iter()
            .any(|s| s.last_name == last_name && s.first_name == first_name)
        {
            warn!("student row {row}: duplicate name {last_name} {first_name}");
        }
        students.push(Student {
            id: StudentId(students.len()),
            last_name: last_name.to_owned(),
            first_name: first_name.to_owned(),
            grades,
            wishes,
        });
    }
    Ok(students)
}

/// Grades use a decimal comma in the source files ("12,5"). An empty cell
/// is a missing grade, not a zero.
fn parse_grade(field: &str) -> Result<Option<f64>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    let grade = field
        .replace(',', ".")
        .parse::<f64>()
        .with_context(|| format!("cannot parse grade {field:?}"))?;
    ensure!(grade.is_finite(), "grade {field:?} is not finite");
    Ok(Some(grade))
}

pub fn save_ranking(path: &Path, assignments: &Assignments) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create ranking file {}", path.display()))?;
    write_ranking(file, assignments)
        .with_context(|| format!("cannot write ranking file {}", path.display()))
}

/// The merit ranking, best student first: name, score and first wish.
pub fn write_ranking<W: Write>(mut writer: W, assignments: &Assignments) -> Result<()> {
    writer.write_all(BOM)?;
    let mut csv = WriterBuilder::new().delimiter(b';').from_writer(writer);
    csv.write_record(["Nom", "Prénom", "Moyenne", "Voeu 1"])?;
    for student in assignments.ranking() {
        let record = assignments.student(student);
        let score = assignments.score(student).to_string();
        csv.write_record([
            record.last_name.as_str(),
            record.first_name.as_str(),
            score.as_str(),
            record.wishes.first().map_or("", String::as_str),
        ])?;
    }
    Ok(csv.flush()?)
}

pub fn save_assignments(path: &Path, assignments: &Assignments) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create assignment file {}", path.display()))?;
    write_assignments(file, assignments)
        .with_context(|| format!("cannot write assignment file {}", path.display()))
}

/// The final assignment, one row per student: first the assigned students
/// sorted by track then name, with the 1-based rank of the satisfied wish,
/// then the unassigned students with empty track and wish cells.
pub fn write_assignments<W: Write>(mut writer: W, assignments: &Assignments) -> Result<()> {
    writer.write_all(BOM)?;
    let mut csv = WriterBuilder::new().delimiter(b';').from_writer(writer);
    csv.write_record(["Nom", "Prénom", "Parcours", "Voeu"])?;
    let mut assigned = Vec::new();
    for track in assignments.all_tracks() {
        for &student in assignments.students_for(track) {
            assigned.push((student, track));
        }
    }
    assigned.sort_by_key(|&(student, track)| {
        let record = assignments.student(student);
        (
            assignments.track(track).name.clone(),
            record.last_name.clone(),
            record.first_name.clone(),
        )
    });
    for (student, track) in assigned {
        let record = assignments.student(student);
        let rank = assignments
            .rank_of(student, track)
            .map_or(String::new(), |rank| (rank + 1).to_string());
        csv.write_record([
            record.last_name.as_str(),
            record.first_name.as_str(),
            assignments.track(track).name.as_str(),
            rank.as_str(),
        ])?;
    }
    let mut unassigned = assignments.unassigned_students();
    unassigned.sort_by_key(|&student| {
        let record = assignments.student(student);
        (record.last_name.clone(), record.first_name.clone())
    });
    for student in unassigned {
        let record = assignments.student(student);
        csv.write_record([record.last_name.as_str(), record.first_name.as_str(), "", ""])?;
    }
    Ok(csv.flush()?)
}
