pub mod company;
pub mod content;
pub mod flash;
pub mod notification;
pub mod submission;
