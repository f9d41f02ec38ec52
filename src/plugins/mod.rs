pub mod controls;
pub mod energy_hud;
pub mod simulation;
pub mod simulation_diagnostics;
pub mod visualization;
