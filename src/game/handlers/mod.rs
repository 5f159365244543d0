pub mod divisions;
pub mod player_actions;
pub mod session;
#[cfg(test)]
pub mod tests;
