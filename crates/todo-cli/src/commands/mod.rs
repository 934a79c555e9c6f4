pub mod add;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod serve;
pub mod update;
