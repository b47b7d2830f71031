//! Repository implementation for recipients.

use diesel::prelude::*;

use crate::{
    domain::recipient::Recipient,
    models::recipient::Recipient as DbRecipient,
    repository::{DieselRepository, RecipientReader, errors::RepositoryResult},
};

impl RecipientReader for DieselRepository {
    fn list_recipients(&self) -> RepositoryResult<Vec<Recipient>> {
        use crate::schema::recipients;

        let mut conn = self.conn()?;

        let rows = recipients::table
            .select(DbRecipient::as_select())
            .load::<DbRecipient>(&mut conn)?;

        let recipients = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Recipient::try_from(row) {
                    Ok(recipient) => Some(recipient),
                    Err(e) => {
                        log::warn!("Skipping recipient row {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(recipients)
    }
}
