// Domain layer - Records kept for an aquarium
pub mod fish;
pub mod species;
pub mod tank;
pub mod tank_statistic;
