//! Generic request to per-line request mapping.
//!
//! [`LobMappers`] fills every slot of the per-line shapes, applying the
//! house defaults for whatever the caller left out. Mapping is pure: the
//! only time-dependent input, the as-of date, is fixed at construction.

mod mappers;
mod overrides;

pub use mappers::LobMappers;
