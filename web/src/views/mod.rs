mod reset;
pub use reset::ResetPage;
