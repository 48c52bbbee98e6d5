use crate::handlers::{
    CnamePitHandler, ManyCutsHandler, SleepHandler, UnknownHandler, CNAME_PIT_LABEL,
    MANY_CUTS_LABEL, SLEEP_LABEL,
};
use crate::ports::QueryHandler;
use awful_dns_domain::config::ZoneConfig;
use std::sync::Arc;

/// A suffix pattern and the handler serving every name beneath it.
pub struct Route {
    pattern: Arc<str>,
    handler: Arc<dyn QueryHandler>,
}

impl Route {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &Arc<dyn QueryHandler> {
        &self.handler
    }
}

/// Maps query names to handlers by longest label-aligned suffix.
///
/// Built once at startup and only read afterwards. The route list is tiny,
/// so lookups scan it linearly.
pub struct QueryRouter {
    routes: Vec<Route>,
    fallback: Arc<dyn QueryHandler>,
}

impl QueryRouter {
    pub fn new(fallback: Arc<dyn QueryHandler>) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Standard registrations: `cnamepit.`, `manycuts.` and `sleep.` under the
    /// configured base domain, everything else to [`UnknownHandler`].
    pub fn for_zone(zone: &ZoneConfig) -> Self {
        Self::new(Arc::new(UnknownHandler))
            .register(&zone.pattern_for(CNAME_PIT_LABEL), Arc::new(CnamePitHandler))
            .register(
                &zone.pattern_for(MANY_CUTS_LABEL),
                Arc::new(ManyCutsHandler::new(zone.advertised_ip)),
            )
            .register(&zone.pattern_for(SLEEP_LABEL), Arc::new(SleepHandler))
    }

    pub fn register(mut self, pattern: &str, handler: Arc<dyn QueryHandler>) -> Self {
        self.routes.push(Route {
            pattern: normalize(pattern).into(),
            handler,
        });
        self
    }

    /// Handler for `name`. Suffixes are tried from the full name down to the
    /// root; the default handler runs when none is registered.
    pub fn route(&self, name: &str) -> &Arc<dyn QueryHandler> {
        let name = normalize(name);

        let mut suffix = name.as_str();
        loop {
            if let Some(route) = self.routes.iter().find(|r| &*r.pattern == suffix) {
                return &route.handler;
            }
            if suffix == "." {
                return &self.fallback;
            }
            suffix = match suffix.split_once('.') {
                Some((_, rest)) if !rest.is_empty() => rest,
                _ => ".",
            };
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fallback(&self) -> &Arc<dyn QueryHandler> {
        &self.fallback
    }
}

/// Lowercase and make fully qualified.
fn normalize(name: &str) -> String {
    let mut name = name.to_ascii_lowercase();
    if !name.ends_with('.') {
        name.push('.');
    }
    name
}
