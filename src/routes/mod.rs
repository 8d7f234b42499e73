mod health_check;
mod home;
mod startup;

pub use health_check::*;
pub use home::*;
pub use startup::*;
