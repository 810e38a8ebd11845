//! Block-explorer deep links for issued credentials.
//!
//! Links follow `https://stellar.expert/explorer/{network}/tx/{transactionHash}`.
//! Both values are pushed as path segments, so they are percent-encoded
//! rather than pasted into the string.

use url::Url;

pub const EXPLORER_BASE: &str = "https://stellar.expert/explorer";

/// Build the explorer link for `transaction_hash` on `network`.
///
/// Returns `None` for an empty hash or network; callers must not render an
/// empty link.
pub fn explorer_url(network: &str, transaction_hash: &str) -> Option<Url> {
    if transaction_hash.is_empty() || network.is_empty() {
        return None;
    }
    let mut url = Url::parse(EXPLORER_BASE).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend([network, "tx", transaction_hash]);
    Some(url)
}
