pub mod outline;
pub mod present;
pub mod show;
