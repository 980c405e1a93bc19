//! Static site content: résumé data tables and the pure lookups over them.
//!
//! Everything here is `'static` and immutable; handlers borrow directly from
//! these tables.

pub mod articles;
pub mod career;
pub mod priority;
pub mod profile;
pub mod projects;
pub mod skills;
