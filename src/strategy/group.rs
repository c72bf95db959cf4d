// Fri Oct 16 2026 - Alex

use crate::engine::{Context, TaskGroup};
use crate::error::{Error, Result};
use crate::strategy::tag::{self, Route, DEFAULT_BUCKET};
use crate::strategy::{Builder, Nope, SharedStrategy, Strategy};
use crate::structure::{Field, Structure};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Routes fields into buckets by their tags, runs every bucket's own
/// pipeline in parallel and concatenates the results in bucket key order.
#[derive(Clone)]
pub struct Group {
    builder: Builder,
}

struct Container {
    bucket: String,
    o: Structure,
    r: Structure,
    stg: SharedStrategy,
}

#[derive(Default)]
struct BucketFields {
    fields: Vec<Field>,
    strategies: String,
}

impl Group {
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }

    fn parse(&self, st: &Structure) -> Result<Vec<Container>> {
        let mut buckets: BTreeMap<String, BucketFields> = BTreeMap::new();
        let mut raw_tags: BTreeMap<String, String> = BTreeMap::new();

        for field in &st.fields {
            let route = tag::parse(&field.tag)?;
            let bucket = route.bucket().to_string();
            if let (Route::Bucket { strategies, .. }, Some(existing)) = (&route, buckets.get(&bucket)) {
                if &existing.strategies != strategies {
                    return Err(Error::InconsistentGroup {
                        group: bucket,
                        field: field.name.clone(),
                        strategies: strategies.clone(),
                    });
                }
            }
            raw_tags.entry(bucket.clone()).or_insert_with(|| field.tag.clone());
            let entry = buckets.entry(bucket).or_default();
            entry.strategies = route.strategies().to_string();
            entry.fields.push(field.clone());
        }

        let mut containers = Vec::with_capacity(buckets.len());
        for (bucket, grouped) in buckets {
            let stg: SharedStrategy = if bucket == tag::SKIP_BUCKET {
                Arc::new(Nope)
            } else {
                let tag = raw_tags.get(&bucket).map(String::as_str).unwrap_or_default();
                let names = tag::strategy_names(tag, &grouped.strategies)?;
                self.builder.build(&names)?
            };
            containers.push(Container {
                o: st.with_fields(grouped.fields),
                r: Structure::default(),
                bucket,
                stg,
            });
        }
        Ok(containers)
    }
}

impl Strategy for Group {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        ctx.check()?;
        let mut containers = self.parse(o)?;

        let group = TaskGroup::new(ctx);
        group.spawn_each(containers.iter_mut(), |gctx, container| {
            log::trace!("Applying bucket {:?} of {} ({} fields)", container.bucket, o.name, container.o.fields.len());
            container.r = container.stg.apply(gctx, &container.o)?;
            Ok(())
        });
        group.wait()?;

        containers.sort_by(|a, b| a.bucket.cmp(&b.bucket));
        let mut r = containers
            .iter()
            .find(|c| c.bucket == DEFAULT_BUCKET)
            .map(|c| c.r.with_fields(Vec::new()))
            .unwrap_or_else(|| o.with_fields(Vec::new()));
        for container in containers {
            r.fields.extend(container.r.fields);
        }
        ctx.check()?;
        Ok(r)
    }
}
