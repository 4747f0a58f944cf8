pub mod lennard_jones;
pub mod moliere;
pub mod shifted_lj;
pub mod yukawa;

pub use lennard_jones::{LennardJones, LjParams};
pub use moliere::{Moliere, MoliereParams};
pub use shifted_lj::ShiftedLennardJones;
pub use yukawa::{Yukawa, YukawaParams};
