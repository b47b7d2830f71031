use crate::dto::quote::QuoteResponse;
use crate::generator::QuoteGenerator;
use crate::repository::RecipientReader;
use crate::services::ServiceResult;

/// Fetches a quote in `lang` and pairs it with all recipients.
///
/// The recipient store is only queried once the quote has been obtained.
pub async fn load_quote<G, R>(generator: &G, repo: &R, lang: &str) -> ServiceResult<QuoteResponse>
where
    G: QuoteGenerator,
    R: RecipientReader + ?Sized,
{
    let quote = generator.generate(lang).await?;
    let recipients = repo.list_recipients()?;

    Ok(QuoteResponse { quote, recipients })
}
