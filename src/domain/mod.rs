//! Domain types describing catalog vehicles and paging metadata.

pub mod car;
