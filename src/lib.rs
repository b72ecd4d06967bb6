pub mod charts;
pub mod cli;
pub mod ctx;
pub mod io;
pub mod patient;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod session;
