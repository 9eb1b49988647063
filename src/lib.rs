pub mod auth;
pub mod config;
pub mod leaderboard;
pub mod records;
pub mod routes;
pub mod state;
pub mod store;
pub mod util_resp;
pub mod validation;

#[cfg(test)]
mod test;
