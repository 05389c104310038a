pub mod badges;
pub mod buckets;
pub mod calendar;
pub mod duration;
pub mod error;
pub mod events;
pub mod ports;
pub mod repo;
pub mod service;
