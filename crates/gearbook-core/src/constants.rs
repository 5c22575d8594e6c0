/// Scheduling constants shared across crates.
///
/// Reservations may only begin and end within the business-hours window
/// `[BUSINESS_DAY_START_HOUR, BUSINESS_DAY_END_HOUR)`.
pub const BUSINESS_DAY_START_HOUR: u32 = 7;
pub const BUSINESS_DAY_END_HOUR: u32 = 19;

/// Upper bound on the number of occurrences a single recurrence expansion may
/// produce. Bounds the work done for a pathological date range; a daily
/// recurrence spanning a full year stays under it.
pub const MAX_OCCURRENCES_PER_BATCH: usize = 366;
