//! Line-of-business detection.
//!
//! A generic request never says which line it is for; the populated fields
//! decide. Lines are checked in a fixed priority order and the first match
//! wins:
//!
//! | Priority | Line | Indicators |
//! |----------|------|------------|
//! | 1 | WorkerCompensation | payroll classes, state of operation |
//! | 2 | Flood | flood zone, elevation certificate flag, base flood elevation, occupancy type |
//! | 3 | Property | building/contents value, construction type, year built, sprinkler or alarm flag |
//! | 4 | GeneralLiability | class code, operations description, annual revenue |

mod detector;

pub use detector::detect;
