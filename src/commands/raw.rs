//! Raw passthrough to arbitrary API verbs.

use anyhow::bail;

use crate::client::ApiClient;
use crate::protocol::content_text;

/// Forward arguments straight to the API: the first token is the verb,
/// the rest go through the client's id/parameter rules untouched.
pub fn raw(client: &ApiClient, args: &[String]) -> anyhow::Result<()> {
    let Some((verb, rest)) = args.split_first() else {
        bail!("Missing verb\nUsage: nagios-cli --raw <verb> [id] [key=value ...]");
    };
    let resp = client.call(verb, rest)?;
    if !resp.success {
        bail!("Failure: {}", content_text(&resp.content));
    }
    println!("{}", content_text(&resp.content));
    Ok(())
}
