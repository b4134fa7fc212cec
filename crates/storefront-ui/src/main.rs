#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Storefront UI entry point. Native builds print how to serve the page instead.

#[cfg(target_arch = "wasm32")]
fn main() {
    storefront_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_META_TAGS: [(&str, &str); 2] = [
    ("storefront-api-base", "backend base URL, e.g. http://localhost:5000/api"),
    ("storefront-recaptcha-site-key", "reCAPTCHA v2 site key"),
];

#[cfg(not(target_arch = "wasm32"))]
fn write_usage(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(out, "storefront-ui runs in the browser. Serve it with `trunk serve`.")?;
    writeln!(out, "index.html reads these <meta> tags:")?;
    for (name, meaning) in CONFIG_META_TAGS {
        writeln!(out, "  {name}: {meaning}")?;
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_usage(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_config_tag() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_usage(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("trunk serve"));
        for (name, _) in CONFIG_META_TAGS {
            assert!(text.contains(name), "missing {name}");
        }
        Ok(())
    }
}
