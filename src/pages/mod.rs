mod chat;
mod dashboard;
mod error;
mod login;

pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
