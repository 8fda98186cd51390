use crate::errors::*;
use url::form_urlencoded;
use url::Url;
use uuid::Uuid;

pub const VERIFY_PATH: &str = "verify";
pub const TICKET_ID_PARAMETER: &str = "id";

/// What a scannable code carries: the verification URL itself plus the
/// address of the rendered image for it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CodePayload {
    pub verification_url: String,
    pub image_url: String,
    pub pixel_size: u32,
}

/// Builds the URL a ticket's scannable code resolves to:
/// `{base_url}/verify?id={ticket_id}`.
pub fn encode(ticket_id: Uuid, base_url: &str) -> Result<String, ApiError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| ApplicationError::new("Verification base URL cannot be used as a base".to_string()))?
        .pop_if_empty()
        .push(VERIFY_PATH);
    url.query_pairs_mut()
        .append_pair(TICKET_ID_PARAMETER, &ticket_id.to_string());
    Ok(url.to_string())
}

/// Resolves a scanned string back to the ticket id it was encoded from.
///
/// Failures here mean the code itself is unreadable; they are reported as
/// bad requests, distinct from a well formed id that matches no ticket.
pub fn decode(raw: &str) -> Result<Uuid, ApplicationError> {
    let url = Url::parse(raw).map_err(|_| ApplicationError::bad_request("Code is not a valid verification URL"))?;
    ticket_id_from_query(url.query().unwrap_or(""))
}

pub fn ticket_id_from_query(query_string: &str) -> Result<Uuid, ApplicationError> {
    let id = form_urlencoded::parse(query_string.as_bytes())
        .find(|(key, _)| key == TICKET_ID_PARAMETER)
        .map(|(_, value)| value.into_owned());

    match id {
        Some(id) => {
            Uuid::parse_str(&id).map_err(|_| ApplicationError::bad_request("Code does not contain a valid ticket id"))
        }
        None => Err(ApplicationError::bad_request("Code does not contain a ticket id")),
    }
}
