//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::recipient::Recipient;
use crate::repository::RecipientReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl RecipientReader for Repository {
        fn list_recipients(&self) -> RepositoryResult<Vec<Recipient>>;
    }
}
