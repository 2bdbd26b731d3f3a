/// What an observer can ask of the driver after seeing a record.
///
/// Returning `None` from the observer keeps the run going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run now; the solution holds every record up to this one.
    StopEarly,
}
