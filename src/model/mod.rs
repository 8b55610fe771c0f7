pub mod chart;
pub mod configs;
pub mod insight;
pub mod report;
pub mod title;
