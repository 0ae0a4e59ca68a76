pub mod gates;
pub mod session;
pub mod step;

pub use session::{DerivedTool, WizardSession};
pub use step::WizardStep;
