mod mach;
mod program;

pub use self::mach::{Machine, MachineContext};
pub use self::program::translate;
