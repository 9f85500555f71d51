mod simulator;
mod trajectory;

pub use simulator::GradientDescentSimulator;
pub use trajectory::Trajectory;
