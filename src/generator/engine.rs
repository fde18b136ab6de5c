use std::sync::Arc;

use log::{debug, warn};

use crate::config::{ResolvedSettings, TocSettings};
use crate::entity::{ContentSource, Entity, EntityField, EntityKey, FieldValue};
use crate::generator::cache::TocCache;
use crate::scan::{extract_heading_field, scan_markup};
use crate::toc::{FieldRewrite, RewriteContent, TableOfContents};
use crate::utils::error::BoxResult;

/// Field type of the table-of-contents field itself; never scanned, so a
/// TOC field cannot feed its own generation
pub const TOC_FIELD_TYPE: &str = "toc";

/// View mode used when rendering field values for scanning
pub const SCAN_VIEW_MODE: &str = "full";

/// How one field value participates in the walk, decided once before
/// dispatch. The sub-entity path excludes the other two; the heading and
/// markup paths are independent and may both apply to the same value.
enum FieldAction<'a> {
    SubEntity(&'a Entity),
    Extract { heading: bool, markup: bool },
    Skip,
}

/// Walks an entity tree in field-display order, collects headings into a
/// [`TableOfContents`], and caches the finished result under every
/// visited entity's key.
pub struct GenerationEngine<S: ContentSource> {
    source: S,
    cache: TocCache,
}

impl<S: ContentSource> GenerationEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, TocCache::new())
    }

    /// Build an engine around an existing cache, e.g. one scoped to an
    /// outer request lifetime
    pub fn with_cache(source: S, cache: TocCache) -> Self {
        Self { source, cache }
    }

    /// Generate the table of contents for an entity tree.
    ///
    /// With `use_cache`, a previous result for the same entity identity
    /// is returned as-is; cache hits do not consider settings, so callers
    /// must not vary settings per call for the same entity and expect
    /// distinct results. Malformed settings fail here, before any
    /// traversal. An entity with zero headings yields an empty outline,
    /// not an error.
    pub fn generate(
        &mut self,
        entity: &Entity,
        settings: &TocSettings,
        use_cache: bool,
    ) -> BoxResult<Arc<TableOfContents>> {
        if use_cache {
            if let Some(cached) = self.cache.get(&entity.key()) {
                debug!("TOC cache hit for {}", entity.key());
                return Ok(cached);
            }
        }

        let resolved = settings.resolve()?;
        let mut toc = TableOfContents::new(entity.key(), resolved.is_relative);
        let mut visited: Vec<EntityKey> = Vec::new();

        self.process_entity(&mut toc, entity, &resolved, &mut visited);

        // Every visited entity, nested ones included, aliases the one
        // finished TOC: presentation code for embedded content needs the
        // enclosing page's complete outline.
        let shared = Arc::new(toc);
        for key in visited {
            self.cache.insert(key, Arc::clone(&shared));
        }

        Ok(shared)
    }

    /// Cache-only read; never triggers generation
    pub fn lookup(&self, entity: &Entity) -> Option<Arc<TableOfContents>> {
        self.cache.get(&entity.key())
    }

    pub fn cache(&self) -> &TocCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn process_entity(
        &self,
        toc: &mut TableOfContents,
        entity: &Entity,
        settings: &ResolvedSettings,
        visited: &mut Vec<EntityKey>,
    ) {
        let key = entity.key();
        if visited.contains(&key) {
            // Guard against cyclic or repeated references; the first
            // visit already contributed this entity's headings
            warn!("entity {} already visited in this walk, skipping", key);
            return;
        }
        visited.push(key);
        debug!("scanning entity {}", entity.key());

        for field in self.ordered_fields(entity) {
            for (delta, value) in field.values.iter().enumerate() {
                match self.classify(entity, field, value, settings) {
                    FieldAction::SubEntity(sub) => {
                        self.process_entity(toc, sub, settings, visited);
                    }
                    FieldAction::Extract { heading, markup } => {
                        if heading {
                            self.extract_heading(toc, entity, field, delta, value);
                        }
                        if markup {
                            self.scan_field_markup(toc, entity, field, delta);
                        }
                    }
                    FieldAction::Skip => {}
                }
            }
        }
    }

    /// Visible fields in display order when a display configuration
    /// exists for the bundle, natural declaration order otherwise
    fn ordered_fields<'a>(&self, entity: &'a Entity) -> Vec<&'a EntityField> {
        match self.source.display_order(&entity.entity_type, &entity.bundle) {
            Some(names) => names.iter().filter_map(|name| entity.field(name)).collect(),
            None => entity.fields.iter().collect(),
        }
    }

    fn classify<'a>(
        &self,
        entity: &Entity,
        field: &EntityField,
        value: &'a FieldValue,
        settings: &ResolvedSettings,
    ) -> FieldAction<'a> {
        if field.field_type == TOC_FIELD_TYPE {
            return FieldAction::Skip;
        }

        if settings.scan_sub_entities {
            if let Some(sub) = self.source.resolve_sub_entity(value) {
                return FieldAction::SubEntity(sub);
            }
        }

        let heading = settings.is_heading_field(&entity.entity_type, &entity.bundle, &field.name);
        let markup = settings.field_types.contains(&field.field_type);
        if heading || markup {
            FieldAction::Extract { heading, markup }
        } else {
            FieldAction::Skip
        }
    }

    fn extract_heading(
        &self,
        toc: &mut TableOfContents,
        entity: &Entity,
        field: &EntityField,
        delta: usize,
        value: &FieldValue,
    ) {
        let text = match value.as_text() {
            Some(text) => text,
            None => return,
        };

        if let Some(heading) = extract_heading_field(text) {
            toc.add_rewrite(FieldRewrite {
                entity_key: entity.key(),
                field_name: field.name.clone(),
                delta,
                content: RewriteContent::AnchorId(heading.id.clone()),
            });
            toc.add_heading(heading);
        }
    }

    fn scan_field_markup(
        &self,
        toc: &mut TableOfContents,
        entity: &Entity,
        field: &EntityField,
        delta: usize,
    ) {
        let markup =
            match self
                .source
                .render_field_value(entity, field, delta, SCAN_VIEW_MODE)
            {
                Ok(markup) => markup,
                Err(e) => {
                    warn!(
                        "failed to render {}.{}[{}], field contributes no headings: {}",
                        entity.key(),
                        field.name,
                        delta,
                        e
                    );
                    return;
                }
            };

        let scan = scan_markup(&markup);
        if scan.headings.is_empty() {
            return;
        }

        for heading in scan.headings {
            toc.add_heading(heading);
        }
        if let Some(rewritten) = scan.rewritten {
            toc.add_rewrite(FieldRewrite {
                entity_key: entity.key(),
                field_name: field.name.clone(),
                delta,
                content: RewriteContent::Markup(rewritten),
            });
        }
    }
}
