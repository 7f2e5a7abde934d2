pub mod df;
pub mod duration;
pub mod logging;
