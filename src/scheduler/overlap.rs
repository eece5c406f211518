use crate::model::TimeRange;
use chrono::NaiveTime;

/// Indique si `candidate` entre en conflit avec `existing`.
///
/// Les bornes sont inclusives : deux créneaux qui se touchent (09:00–12:00
/// puis 12:00–15:00) sont en conflit, dans les deux sens.
pub fn overlaps(candidate: &TimeRange, existing: &TimeRange) -> bool {
    let (c_start, c_end) = (candidate.start(), candidate.end());
    let (e_start, e_end) = (existing.start(), existing.end());

    c_start == e_start
        || c_end == e_end
        || strictly_within(c_start, e_start, e_end)
        || strictly_within(c_end, e_start, e_end)
        || (c_start < e_start && c_end > e_end)
        // bornes partagées
        || c_start == e_end
        || c_end == e_start
}

fn strictly_within(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    time > start && time < end
}
