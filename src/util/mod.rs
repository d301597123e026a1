pub mod axis_style;
pub mod io;
pub mod logger;
pub mod parallel;
pub mod timer;
