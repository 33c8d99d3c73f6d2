//! Coaching reports and their renderings

pub mod report;
pub mod formatter;
