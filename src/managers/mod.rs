// Andistro launcher state managers

pub mod window_lifecycle;
