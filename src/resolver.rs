//! Relationship resolution over a snapshot's flat collections.
//!
//! The snapshot is denormalized: chunks know their modules and forward
//! imports, assets know their producing chunk, and nothing stores reverse
//! edges. The resolver answers the cross-reference questions a detail view
//! needs (which chunks contain this module? who imports this asset's chunk?)
//! against an explicitly borrowed snapshot handle.
//!
//! Lookup misses are not errors: unknown ids yield `None` or empty
//! collections so callers can render "not found" states directly.

use std::collections::HashMap;

use crate::metrics::{partition_calls, CallPartition};
use crate::snapshot::{
    Asset, Chunk, HookCall, ImportRecord, Module, ModuleBuildMetrics, Package, PluginCall,
    Snapshot, TransformCall,
};

/// Read-only query engine over one snapshot.
///
/// Construction scans the chunk list once to index reverse chunk-import
/// edges; every other relationship is computed per query by linear scan,
/// which is adequate at bundler-build scale.
#[derive(Debug)]
pub struct Resolver<'a> {
    snapshot: &'a Snapshot,
    /// Target chunk id → ids of chunks importing it, in snapshot order.
    chunk_importers: HashMap<u32, Vec<u32>>,
}

/// A module joined with the chunks and assets it reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDetail<'a> {
    /// Module id.
    pub id: &'a str,
    /// Outgoing import edges.
    pub imports: &'a [ImportRecord],
    /// Ids of importing modules.
    pub importers: &'a [String],
    /// Chunks whose module set contains this module.
    pub chunks: Vec<&'a Chunk>,
    /// Assets produced by any of those chunks.
    pub assets: Vec<&'a Asset>,
    /// Raw per-hook metrics.
    pub build_metrics: &'a ModuleBuildMetrics,
    /// Load calls re-sorted ascending by plugin id (stable).
    pub loads: Vec<HookCall>,
    /// Resolve-id calls re-sorted ascending by plugin id (stable).
    pub resolve_ids: Vec<HookCall>,
}

/// An asset joined with its owning chunk and chunk-level import relations.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail<'a> {
    /// The asset itself.
    pub asset: &'a Asset,
    /// The owning chunk (empty when the asset has no chunk, or the
    /// reference dangles).
    pub chunks: Vec<&'a Chunk>,
    /// Assets of chunks that import this asset's chunk.
    pub importers: Vec<&'a Asset>,
    /// Assets of chunks this asset's chunk imports.
    pub imports: Vec<&'a Asset>,
}

/// A chunk joined with its primary asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkDetail<'a> {
    /// The chunk itself.
    pub chunk: &'a Chunk,
    /// The asset produced by this chunk, if any. When several assets claim
    /// the same chunk only the first match is attached.
    pub asset: Option<&'a Asset>,
}

/// A plugin's recorded calls plus the derived per-hook partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDetail<'a> {
    /// Plugin id the lookup was keyed by.
    pub plugin_id: u32,
    /// Recorded name, or the declared name from session metadata when the
    /// plugin made no tracked calls (empty when not declared either).
    pub plugin_name: &'a str,
    /// Every recorded call, in recording order.
    pub calls: &'a [PluginCall],
    /// Calls split by hook kind, recording order preserved within each.
    pub partition: CallPartition<'a>,
}

impl<'a> Resolver<'a> {
    /// Builds a resolver over the given snapshot, indexing reverse
    /// chunk-import edges once.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        let mut chunk_importers: HashMap<u32, Vec<u32>> = HashMap::new();
        for chunk in &snapshot.chunks {
            for import in &chunk.imports {
                chunk_importers.entry(import.chunk_id).or_default().push(chunk.chunk_id);
            }
        }
        Self { snapshot, chunk_importers }
    }

    /// Looks up a module and joins it with its chunks, assets, and sorted
    /// hook calls. `None` when the id is unknown.
    #[must_use]
    pub fn module_detail(&self, module_id: &str) -> Option<ModuleDetail<'a>> {
        let module = self.module_by_id(module_id)?;

        let chunks: Vec<&Chunk> = self
            .snapshot
            .chunks
            .iter()
            .filter(|chunk| chunk.modules.iter().any(|m| m == module_id))
            .collect();

        let assets: Vec<&Asset> = self
            .snapshot
            .assets
            .iter()
            .filter(|asset| {
                asset
                    .chunk_id
                    .is_some_and(|id| chunks.iter().any(|chunk| chunk.chunk_id == id))
            })
            .collect();

        let mut loads = module.build_metrics.loads.clone();
        loads.sort_by_key(|call| call.plugin_id);
        let mut resolve_ids = module.build_metrics.resolve_ids.clone();
        resolve_ids.sort_by_key(|call| call.plugin_id);

        Some(ModuleDetail {
            id: &module.id,
            imports: &module.imports,
            importers: &module.importers,
            chunks,
            assets,
            build_metrics: &module.build_metrics,
            loads,
            resolve_ids,
        })
    }

    /// Transform calls for a module, sorted ascending by plugin id (stable).
    ///
    /// Empty when the module is unknown or recorded no transforms.
    #[must_use]
    pub fn module_transforms(&self, module_id: &str) -> Vec<TransformCall> {
        let Some(module) = self.module_by_id(module_id) else {
            return Vec::new();
        };
        let mut transforms = module.build_metrics.transforms.clone();
        transforms.sort_by_key(|call| call.plugin_id);
        transforms
    }

    /// Looks up an asset by filename and joins it with its owning chunk and
    /// the assets of importing/imported chunks. `None` when the filename is
    /// unknown.
    ///
    /// Importer and import lists silently drop chunks without a produced
    /// asset; a dangling `chunk_id` yields empty relations, not a failure.
    #[must_use]
    pub fn asset_detail(&self, filename: &str) -> Option<AssetDetail<'a>> {
        let asset = self.snapshot.assets.iter().find(|a| a.filename == filename)?;

        let Some(chunk_id) = asset.chunk_id else {
            return Some(AssetDetail {
                asset,
                chunks: Vec::new(),
                importers: Vec::new(),
                imports: Vec::new(),
            });
        };

        let chunk = self.chunk_by_id(chunk_id);

        let importers: Vec<&Asset> = self
            .chunk_importers
            .get(&chunk_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&importer_id| self.asset_for_chunk(importer_id))
            .collect();

        let imports: Vec<&Asset> = chunk
            .map(|c| c.imports.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|import| self.asset_for_chunk(import.chunk_id))
            .collect();

        Some(AssetDetail { asset, chunks: chunk.into_iter().collect(), importers, imports })
    }

    /// Looks up a chunk and attaches its primary asset. `None` when the id
    /// is unknown.
    #[must_use]
    pub fn chunk_info(&self, chunk_id: u32) -> Option<ChunkDetail<'a>> {
        let chunk = self.chunk_by_id(chunk_id)?;
        Some(ChunkDetail { chunk, asset: self.asset_for_chunk(chunk_id) })
    }

    /// Looks up a package by its composite `"name@version"` key.
    #[must_use]
    pub fn package_detail(&self, package_id: &str) -> Option<&'a Package> {
        self.snapshot.packages.iter().find(|package| package.matches_id(package_id))
    }

    /// Joins a plugin's recorded calls with the derived per-hook partitions.
    ///
    /// Total: a plugin with no tracked calls resolves to an empty record
    /// carrying the name declared in session metadata (empty string when the
    /// id was never declared), never to a failure.
    #[must_use]
    pub fn plugin_detail(&self, plugin_id: u32) -> PluginDetail<'a> {
        if let Some(metrics) = self.snapshot.plugin_build_metrics.get(&plugin_id) {
            return PluginDetail {
                plugin_id,
                plugin_name: &metrics.plugin_name,
                calls: &metrics.calls,
                partition: partition_calls(&metrics.calls),
            };
        }

        let declared_name = self
            .snapshot
            .meta
            .plugins
            .iter()
            .find(|plugin| plugin.plugin_id == plugin_id)
            .map_or("", |plugin| plugin.name.as_str());

        PluginDetail {
            plugin_id,
            plugin_name: declared_name,
            calls: &[],
            partition: CallPartition::default(),
        }
    }

    fn module_by_id(&self, module_id: &str) -> Option<&'a Module> {
        self.snapshot.modules.iter().find(|module| module.id == module_id)
    }

    fn chunk_by_id(&self, chunk_id: u32) -> Option<&'a Chunk> {
        self.snapshot.chunks.iter().find(|chunk| chunk.chunk_id == chunk_id)
    }

    /// First asset claiming the given chunk; ties are resolved by snapshot
    /// order (documented 1:1 assumption between a chunk and its asset).
    fn asset_for_chunk(&self, chunk_id: u32) -> Option<&'a Asset> {
        self.snapshot.assets.iter().find(|asset| asset.chunk_id == Some(chunk_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{CallKind, ChunkImport, PluginBuildMetrics, PluginRef, SessionMeta};

    fn module(id: &str) -> Module {
        Module { id: id.to_string(), ..Module::default() }
    }

    fn chunk(chunk_id: u32, modules: &[&str], imports: &[u32]) -> Chunk {
        Chunk {
            chunk_id,
            name: None,
            modules: modules.iter().map(|m| (*m).to_string()).collect(),
            imports: imports.iter().map(|&chunk_id| ChunkImport { chunk_id }).collect(),
        }
    }

    fn asset(filename: &str, chunk_id: Option<u32>) -> Asset {
        Asset { filename: filename.to_string(), size: 0, chunk_id }
    }

    fn hook_call(plugin_id: u32, duration: f64) -> HookCall {
        HookCall { plugin_id, plugin_name: None, duration }
    }

    fn transform_call(plugin_id: u32, duration: f64) -> TransformCall {
        TransformCall { plugin_id, plugin_name: None, duration, diff_added: 0, diff_removed: 0 }
    }

    #[test]
    fn module_detail_unknown_id_is_none() {
        let snapshot = Snapshot::default();
        let resolver = Resolver::new(&snapshot);
        assert!(resolver.module_detail("missing.ts").is_none());
    }

    #[test]
    fn module_detail_finds_exactly_the_containing_chunks() {
        let snapshot = Snapshot {
            modules: vec![module("a.ts"), module("b.ts")],
            chunks: vec![
                chunk(1, &["a.ts", "b.ts"], &[]),
                chunk(2, &["b.ts"], &[]),
                chunk(3, &["a.ts"], &[]),
            ],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let detail = resolver.module_detail("a.ts").unwrap();
        let chunk_ids: Vec<u32> = detail.chunks.iter().map(|c| c.chunk_id).collect();
        assert_eq!(chunk_ids, vec![1, 3]);
    }

    #[test]
    fn module_detail_maps_chunks_to_their_assets() {
        // The end-to-end example: one module in one chunk with one asset.
        let snapshot = Snapshot {
            modules: vec![module("a.ts"), module("b.ts")],
            chunks: vec![chunk(1, &["a.ts", "b.ts"], &[])],
            assets: vec![asset("a.js", Some(1)), asset("style.css", None)],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let detail = resolver.module_detail("a.ts").unwrap();
        assert_eq!(detail.chunks.len(), 1);
        assert_eq!(detail.chunks[0].chunk_id, 1);
        let filenames: Vec<&str> = detail.assets.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(filenames, vec!["a.js"]);
    }

    #[test]
    fn module_detail_sorts_hook_calls_stably() {
        let mut m = module("a.ts");
        m.build_metrics.loads =
            vec![hook_call(2, 0.1), hook_call(1, 0.2), hook_call(2, 0.3)];
        m.build_metrics.resolve_ids = vec![hook_call(3, 0.4), hook_call(0, 0.5)];
        let snapshot = Snapshot { modules: vec![m], ..Snapshot::default() };

        let resolver = Resolver::new(&snapshot);
        let detail = resolver.module_detail("a.ts").unwrap();

        let load_order: Vec<(u32, f64)> =
            detail.loads.iter().map(|c| (c.plugin_id, c.duration)).collect();
        // Ties keep their original relative order: (2, 0.1) before (2, 0.3).
        assert_eq!(load_order, vec![(1, 0.2), (2, 0.1), (2, 0.3)]);

        let resolve_order: Vec<u32> = detail.resolve_ids.iter().map(|c| c.plugin_id).collect();
        assert_eq!(resolve_order, vec![0, 3]);
        // The raw metrics keep recording order.
        assert_eq!(detail.build_metrics.loads[0].plugin_id, 2);
    }

    #[test]
    fn module_transforms_sorted_with_defaults() {
        let mut m = module("a.ts");
        m.build_metrics.transforms = vec![transform_call(5, 1.0), transform_call(1, 2.0)];
        let snapshot = Snapshot { modules: vec![m], ..Snapshot::default() };

        let resolver = Resolver::new(&snapshot);
        let transforms = resolver.module_transforms("a.ts");
        let order: Vec<u32> = transforms.iter().map(|t| t.plugin_id).collect();
        assert_eq!(order, vec![1, 5]);
        assert_eq!(transforms[0].diff_added, 0);
        assert_eq!(transforms[0].diff_removed, 0);
    }

    #[test]
    fn module_transforms_empty_for_unknown_or_untransformed() {
        let snapshot = Snapshot { modules: vec![module("a.ts")], ..Snapshot::default() };
        let resolver = Resolver::new(&snapshot);
        assert!(resolver.module_transforms("a.ts").is_empty());
        assert!(resolver.module_transforms("missing.ts").is_empty());
    }

    #[test]
    fn asset_detail_unknown_filename_is_none() {
        let snapshot = Snapshot::default();
        let resolver = Resolver::new(&snapshot);
        assert!(resolver.asset_detail("missing.js").is_none());
    }

    #[test]
    fn asset_detail_without_chunk_has_empty_relations() {
        let snapshot =
            Snapshot { assets: vec![asset("favicon.ico", None)], ..Snapshot::default() };
        let resolver = Resolver::new(&snapshot);
        let detail = resolver.asset_detail("favicon.ico").unwrap();
        assert_eq!(detail.asset.filename, "favicon.ico");
        assert!(detail.chunks.is_empty());
        assert!(detail.importers.is_empty());
        assert!(detail.imports.is_empty());
    }

    #[test]
    fn asset_detail_importers_and_imports_are_symmetric() {
        // Chunk 1 imports chunk 2; both produce an asset.
        let snapshot = Snapshot {
            chunks: vec![chunk(1, &[], &[2]), chunk(2, &[], &[])],
            assets: vec![asset("entry.js", Some(1)), asset("shared.js", Some(2))],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);

        let entry = resolver.asset_detail("entry.js").unwrap();
        let entry_imports: Vec<&str> =
            entry.imports.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(entry_imports, vec!["shared.js"]);
        assert!(entry.importers.is_empty());

        let shared = resolver.asset_detail("shared.js").unwrap();
        let shared_importers: Vec<&str> =
            shared.importers.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(shared_importers, vec!["entry.js"]);
        assert!(shared.imports.is_empty());
    }

    #[test]
    fn asset_detail_drops_relations_without_produced_assets() {
        // Chunk 1 imports chunks 2 and 3, but only chunk 3 produced an asset.
        // Chunk 4 imports chunk 1 but produced nothing.
        let snapshot = Snapshot {
            chunks: vec![
                chunk(1, &[], &[2, 3]),
                chunk(2, &[], &[]),
                chunk(3, &[], &[]),
                chunk(4, &[], &[1]),
            ],
            assets: vec![asset("entry.js", Some(1)), asset("three.js", Some(3))],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let detail = resolver.asset_detail("entry.js").unwrap();
        let imports: Vec<&str> = detail.imports.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(imports, vec!["three.js"]);
        assert!(detail.importers.is_empty());
    }

    #[test]
    fn asset_detail_tolerates_dangling_chunk_reference() {
        // Asset points at chunk 9, which does not exist; chunk 1 still
        // declares an import on 9, so the reverse edge survives.
        let snapshot = Snapshot {
            chunks: vec![chunk(1, &[], &[9])],
            assets: vec![asset("ghost.js", Some(9)), asset("entry.js", Some(1))],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let detail = resolver.asset_detail("ghost.js").unwrap();
        assert!(detail.chunks.is_empty());
        assert!(detail.imports.is_empty());
        let importers: Vec<&str> = detail.importers.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(importers, vec!["entry.js"]);
    }

    #[test]
    fn chunk_info_attaches_first_matching_asset() {
        let snapshot = Snapshot {
            chunks: vec![chunk(1, &["a.ts"], &[])],
            assets: vec![asset("first.js", Some(1)), asset("second.js", Some(1))],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        let info = resolver.chunk_info(1).unwrap();
        assert_eq!(info.asset.unwrap().filename, "first.js");
    }

    #[test]
    fn chunk_info_unknown_id_is_none_and_assetless_chunk_is_fine() {
        let snapshot = Snapshot { chunks: vec![chunk(1, &[], &[])], ..Snapshot::default() };
        let resolver = Resolver::new(&snapshot);
        assert!(resolver.chunk_info(2).is_none());
        assert!(resolver.chunk_info(1).unwrap().asset.is_none());
    }

    #[test]
    fn package_detail_exact_hit_and_miss() {
        let snapshot = Snapshot {
            packages: vec![Package {
                name: "left-pad".to_string(),
                version: "1.3.0".to_string(),
                path: None,
            }],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);
        assert_eq!(resolver.package_detail("left-pad@1.3.0").unwrap().name, "left-pad");
        assert!(resolver.package_detail("left-pad@9.9.9").is_none());
    }

    #[test]
    fn plugin_detail_partitions_recorded_calls() {
        let calls = vec![
            PluginCall { kind: CallKind::Transform, module_id: None, duration: 1.0 },
            PluginCall { kind: CallKind::Resolve, module_id: None, duration: 2.0 },
            PluginCall { kind: CallKind::Load, module_id: None, duration: 3.0 },
            PluginCall { kind: CallKind::Transform, module_id: None, duration: 4.0 },
        ];
        let mut snapshot = Snapshot::default();
        snapshot.plugin_build_metrics.insert(
            7,
            PluginBuildMetrics { plugin_id: 7, plugin_name: "ts".to_string(), calls },
        );

        let resolver = Resolver::new(&snapshot);
        let detail = resolver.plugin_detail(7);
        assert_eq!(detail.plugin_name, "ts");
        assert_eq!(detail.calls.len(), 4);
        assert_eq!(detail.partition.resolve_ids.len(), 1);
        assert_eq!(detail.partition.loads.len(), 1);
        assert_eq!(detail.partition.transforms.len(), 2);
        // Recording order preserved inside a partition.
        assert_eq!(detail.partition.transforms[0].duration, 1.0);
        assert_eq!(detail.partition.transforms[1].duration, 4.0);
    }

    #[test]
    fn plugin_detail_falls_back_to_declared_name() {
        let snapshot = Snapshot {
            meta: SessionMeta {
                plugins: vec![PluginRef { plugin_id: 2, name: "alias".to_string() }],
                ..SessionMeta::default()
            },
            ..Snapshot::default()
        };
        let resolver = Resolver::new(&snapshot);

        let declared = resolver.plugin_detail(2);
        assert_eq!(declared.plugin_name, "alias");
        assert!(declared.calls.is_empty());
        assert_eq!(declared.partition.call_count(), 0);

        let undeclared = resolver.plugin_detail(99);
        assert_eq!(undeclared.plugin_name, "");
        assert!(undeclared.calls.is_empty());
    }
}
