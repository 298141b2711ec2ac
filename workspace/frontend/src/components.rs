pub mod conditions;
pub mod crop_select;
pub mod layout;
pub mod parameter_control;
pub mod price_chart;
pub mod results;

pub use conditions::ConditionsFields;
pub use results::{Prediction, ResultsPanel};
