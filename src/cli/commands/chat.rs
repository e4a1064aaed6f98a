use anyhow::Result;

use super::{ConnectionOptions, open_store};
use crate::chat::{ChatSession, SessionConfig};
use crate::dictionary::builtin;

pub struct ChatOptions {
    pub connection: ConnectionOptions,
    pub lang: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let resolved = options.connection.resolve(options.lang, false)?;
    let store = open_store(resolved.cache);

    let config = SessionConfig {
        backend_name: resolved.backend_name,
        endpoint: resolved.endpoint,
        api_key: resolved.api_key,
        language: resolved.language,
        timeout: resolved.timeout,
    };

    let mut session = ChatSession::new(config, builtin(), store);
    session.run().await
}
