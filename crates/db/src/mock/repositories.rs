use mockall::mock;
use uuid::Uuid;

use crate::models::{DbTodo, DbUser};

// Mock repositories for testing. Signatures mirror the real repository
// functions; `&'static str` stands in for borrowed text so mockall
// expectations can match on it.
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            email: &'static str,
            password_hash: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub TodoRepo {
        pub async fn create_todo(
            &self,
            user_id: Uuid,
            text: &'static str,
        ) -> eyre::Result<DbTodo>;

        pub async fn list_todos_by_owner(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbTodo>>;

        pub async fn set_completed(
            &self,
            id: Uuid,
            user_id: Uuid,
            completed: bool,
        ) -> eyre::Result<Option<DbTodo>>;

        pub async fn delete_todo(
            &self,
            id: Uuid,
            user_id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
