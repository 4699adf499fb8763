/// Recurrence tags
///
/// Each constant represents one of the supported billing cadences. The tag
/// is stored verbatim on the subscription record and interpreted by the
/// costs module at read time.

/// Billed every week: 52 cycles per year.
pub const RECURRENCE_WEEKLY: &str = "WEEKLY";

/// Billed every month: the identity cadence for monthly figures.
pub const RECURRENCE_MONTHLY: &str = "MONTHLY";

/// Billed twice a year.
pub const RECURRENCE_SEMIANNUAL: &str = "SEMIANNUAL";

/// Billed once a year. The monthly figure divides by the 52/12 average
/// month, mirroring the weekly multiplier.
pub const RECURRENCE_YEARLY: &str = "YEARLY";

/// All recognized recurrence tags
pub const RECURRENCE_TAGS: [&str; 4] = [
    RECURRENCE_WEEKLY,
    RECURRENCE_MONTHLY,
    RECURRENCE_SEMIANNUAL,
    RECURRENCE_YEARLY,
];

/// Shortest allowed subscription name
pub const NAME_MIN_LENGTH: usize = 2;

/// Longest allowed subscription name
pub const NAME_MAX_LENGTH: usize = 120;
