pub mod assessment;
pub mod share_link;
pub mod user;
