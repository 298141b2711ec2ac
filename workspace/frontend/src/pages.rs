mod about;
mod contact;
mod home;
mod predict;
mod submit_data;

pub use about::About;
pub use contact::ContactPage;
pub use home::Home;
pub use predict::PredictPage;
pub use submit_data::SubmitDataPage;
