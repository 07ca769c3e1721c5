pub mod chart;
pub mod rankings;
pub mod timeline;
