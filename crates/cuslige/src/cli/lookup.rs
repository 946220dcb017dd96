//! One-shot lookup command.

use cuslige::{CusligeApp, ProfilePresenter, ReplyPresenter};
use serde_json::json;

/// Resolve `username` and print it as a text reply or JSON.
pub async fn lookup_user(
    app: &CusligeApp,
    username: &str,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let presenter = ReplyPresenter::default();

    match app.lookup(username).await {
        Ok(lookup) if as_json => {
            let output = json!({
                "record": lookup.record(),
                "premium": lookup.premium(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Ok(lookup) => {
            println!("{}", presenter.present(&lookup));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", presenter.present_error(&e));
            Err(e.into())
        }
    }
}
