use std::collections::HashMap;

use super::{ScoredStudent, Student, StudentId, Track, TrackId};
use crate::config::TrackConfig;
use crate::error::ConfigError;

/// State of one allocation run: the scored students, the validated track
/// table, each student's wish list resolved to track ids, and who sits
/// where. Occupancy lives here and nowhere else, so every run starts from
/// an empty seating plan.
#[derive(Debug)]
pub struct Assignments {
    pub students: Vec<ScoredStudent>,
    pub tracks: Vec<Track>,
    wishes: Vec<Vec<TrackId>>,
    assigned_to: Vec<Option<TrackId>>,
    assigned: Vec<Vec<StudentId>>,
}

impl Assignments {
    /// Build the initial state with nobody assigned. A negative capacity or
    /// a wish naming an unknown track is rejected here, before any seat is
    /// taken.
    pub fn new(
        students: Vec<ScoredStudent>,
        tracks: &[TrackConfig],
    ) -> Result<Assignments, ConfigError> {
        assert!(
            students
                .iter()
                .enumerate()
                .all(|(id, s)| s.student.id == StudentId(id)),
            "student ids must match input order"
        );
        let tracks = tracks
            .iter()
            .enumerate()
            .map(|(id, track)| {
                if track.capacity < 0 {
                    return Err(ConfigError::NegativeCapacity {
                        track: track.name.clone(),
                        capacity: track.capacity,
                    });
                }
                Ok(Track {
                    id: TrackId(id),
                    name: track.name.clone(),
                    capacity: track.capacity as usize,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let ids = tracks
            .iter()
            .map(|track| (track.name.as_str(), track.id))
            .collect::<HashMap<_, _>>();
        let wishes = students
            .iter()
            .map(|s| {
                s.student
                    .wishes
                    .iter()
                    .map(|wish| {
                        ids.get(wish.as_str())
                            .copied()
                            .ok_or_else(|| ConfigError::UnknownTrack {
                                student: s.student.full_name(),
                                track: wish.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let slen = students.len();
        let tlen = tracks.len();
        Ok(Assignments {
            students,
            tracks,
            wishes,
            assigned_to: vec![None; slen],
            assigned: vec![Vec::new(); tlen],
        })
    }

    pub fn student(&self, StudentId(student): StudentId) -> &Student {
        &self.students[student].student
    }

    pub fn score(&self, StudentId(student): StudentId) -> f64 {
        self.students[student].score
    }

    pub fn track(&self, TrackId(track): TrackId) -> &Track {
        &self.tracks[track]
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        (0..self.students.len()).map(StudentId).collect()
    }

    pub fn all_tracks(&self) -> Vec<TrackId> {
        (0..self.tracks.len()).map(TrackId).collect()
    }

    pub fn wishes(&self, StudentId(student): StudentId) -> &Vec<TrackId> {
        &self.wishes[student]
    }

    /// Position of `track` in the student's wish list, 0 for the first wish.
    pub fn rank_of(&self, student: StudentId, track: TrackId) -> Option<usize> {
        self.wishes(student).iter().position(|&t| t == track)
    }

    /// Students ordered by merit, best first. Equal scores keep input order.
    pub fn ranking(&self) -> Vec<StudentId> {
        let mut ranking = self.all_students();
        ranking.sort_by(|&a, &b| self.score(b).total_cmp(&self.score(a)).then(a.cmp(&b)));
        ranking
    }

    pub fn track_for(&self, StudentId(student): StudentId) -> Option<TrackId> {
        self.assigned_to[student]
    }

    pub fn students_for(&self, TrackId(track): TrackId) -> &Vec<StudentId> {
        &self.assigned[track]
    }

    pub fn assign_to(&mut self, student: StudentId, track: TrackId) {
        assert!(
            self.track_for(student).is_none(),
            "a track is already assigned to this student"
        );
        assert!(
            self.rank_of(student, track).is_some(),
            "cannot assign a student to a track they did not wish"
        );
        assert!(!self.is_full(track), "cannot assign to a full track");
        self.assigned_to[student.0] = Some(track);
        self.assigned[track.0].push(student);
    }

    pub fn unassigned_students(&self) -> Vec<StudentId> {
        self.assigned_to
            .iter()
            .enumerate()
            .filter_map(|(id, assignment)| {
                if assignment.is_none() {
                    Some(StudentId(id))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn size(&self, track: TrackId) -> usize {
        self.students_for(track).len()
    }

    pub fn is_full(&self, track: TrackId) -> bool {
        self.size(track) >= self.track(track).capacity
    }

    pub fn total_seats(&self) -> usize {
        self.tracks.iter().map(|track| track.capacity).sum()
    }
}
