pub mod errors;
pub mod game;
pub mod logging;
pub mod market_data;
