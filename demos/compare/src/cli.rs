use clap::{Parser, ValueEnum};

/// Time the array-of-structures and structure-of-arrays particle systems side by side
#[derive(Parser)]
#[command()]
pub struct Args {
    /// Total particles in each system
    #[arg(default_value_t = 1_000_000)]
    pub particles: usize,

    /// Calls of every timed operation
    #[arg(short, long, default_value_t = 100)]
    pub iterations: u32,

    /// Timestep passed to every operation
    #[arg(long, default_value_t = 0.016f32)]
    pub dt: f32,

    /// Gravity strength, applied along -Y
    #[arg(short, long, default_value_t = 9.81f32)]
    pub gravity: f32,

    /// Operation to time
    #[arg(long, value_enum, default_value_t = Op::All)]
    pub op: Op,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Op {
    UpdatePositions,
    KineticEnergy,
    ApplyGravity,
    Update,
    All,
}

impl Op {
    pub const EACH: [Op; 4] = [
        Op::UpdatePositions,
        Op::KineticEnergy,
        Op::ApplyGravity,
        Op::Update,
    ];

    /// The single operations this selection expands to.
    pub fn expand(self) -> &'static [Op] {
        match self {
            Op::UpdatePositions => &[Op::UpdatePositions],
            Op::KineticEnergy => &[Op::KineticEnergy],
            Op::ApplyGravity => &[Op::ApplyGravity],
            Op::Update => &[Op::Update],
            Op::All => &Op::EACH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::UpdatePositions => "update_positions",
            Op::KineticEnergy => "compute_kinetic_energy",
            Op::ApplyGravity => "apply_gravity",
            Op::Update => "update",
            Op::All => "all",
        }
    }
}
