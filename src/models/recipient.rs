//! Diesel model representing a stored recipient row.

use diesel::prelude::*;

use crate::domain::recipient::Recipient as DomainRecipient;
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::recipients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::recipient::Recipient`].
pub struct Recipient {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<Recipient> for DomainRecipient {
    type Error = TypeConstraintError;

    fn try_from(recipient: Recipient) -> Result<Self, Self::Error> {
        Ok(Self {
            id: recipient.id,
            name: recipient
                .name
                .ok_or(TypeConstraintError::MissingValue("name"))?,
            email: recipient
                .email
                .ok_or(TypeConstraintError::MissingValue("email"))?,
        })
    }
}
