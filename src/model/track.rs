/// Position of the track in the configuration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TrackId(pub usize);

/// A track with a validated, non-negative seat capacity.
#[derive(Clone, Debug)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub capacity: usize,
}
