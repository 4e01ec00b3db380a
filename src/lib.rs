//! Energy Advisor library
//!
//! Estimates household electricity consumption from appliance data, resolves
//! time-of-use tariffs, aggregates history, projects month-end and yearly
//! consumption and produces energy-saving recommendations.
//!
//! Everything here is pure computation over caller-supplied snapshots; the
//! clock is passed in explicitly.

pub mod advisor;
pub mod analytics;
pub mod consumption;
pub mod core;
pub mod forecast;
pub mod household;
pub mod i18n;
pub mod pricing;
pub mod report;
