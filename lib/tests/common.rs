#![allow(dead_code)]

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn metadata(path: &str, bytes: usize, rev: &str) -> String {
    format!(
        r#"{{"size": "{bytes} bytes", "rev": "{rev}", "thumb_exists": false, "bytes": {bytes}, "modified": "Mon, 07 Apr 2014 23:13:16 +0000", "path": "{path}", "is_dir": false, "icon": "page_white_text", "root": "dropbox", "mime_type": "text/plain"}}"#
    )
}
