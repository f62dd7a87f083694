//! Folding message sites from all scanned files into one catalog.

use crate::core::catalog::{Catalog, CatalogEntry, Context, Flag};
use crate::core::extract::MessageSite;
use crate::core::key::{KeyScheme, derive_key};

/// Settings for the aggregation fold.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Sites declaring a different `messageLocale` are dropped.
    pub default_locale: String,
    pub key_scheme: KeyScheme,
    pub namespace: Option<String>,
}

/// Fold per-file site sequences into a deduplicated catalog.
///
/// Callers must supply files in a fixed order (the scanner sorts them
/// lexicographically); within a file, sites are already in extraction
/// order. The result then only depends on catalog content, never on
/// completion order of parallel extraction.
pub fn aggregate(
    per_file_sites: Vec<(String, Vec<MessageSite>)>,
    options: &AggregateOptions,
) -> Catalog {
    let mut catalog = Catalog::new();

    let sites = per_file_sites.into_iter().flat_map(|(_, sites)| sites);
    for site in sites {
        if site
            .message_locale()
            .is_some_and(|locale| locale != options.default_locale)
        {
            continue;
        }

        let key = match (&site.explicit_key, &site.message) {
            (Some(key), _) => key.clone(),
            (None, Some(message)) => derive_key(
                message,
                options.namespace.as_deref(),
                options.key_scheme,
            ),
            // The extractor never emits a site without either
            (None, None) => continue,
        };

        let mut context = Context::new(site.file.clone(), site.line, site.column);
        if let Some(description) = site.description() {
            context = context.with_description(description);
        }

        match catalog.get_mut(&key) {
            None => {
                catalog.insert(
                    key,
                    CatalogEntry {
                        message: site.message.clone(),
                        contexts: vec![context],
                        flag: Flag::None,
                    },
                );
            }
            Some(entry) => {
                // A second scan revisiting the exact same location is a
                // duplicate; the same message elsewhere is a new context.
                if !entry.contexts.iter().any(|c| c.same_location(&context)) {
                    entry.contexts.push(context);
                }
            }
        }
    }

    catalog
}
