pub mod errors;
pub mod db;
pub mod singer;

#[cfg(test)]
mod tests;
