pub mod actors;
pub mod behaviors;
pub mod collision;
pub mod stepper;
