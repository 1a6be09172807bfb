pub mod hooks;
pub mod processes;
pub mod run;
