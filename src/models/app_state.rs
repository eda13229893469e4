use crate::models::user::AuthenticatedUser;
use yewdux::Store;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<AuthenticatedUser>,
}
