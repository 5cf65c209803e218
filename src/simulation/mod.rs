pub mod states;
pub mod params;
pub mod forces;
pub mod boundary;
pub mod integrator;
pub mod trajectory;
pub mod scenario;
